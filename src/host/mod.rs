pub mod driver;
pub mod idle;
pub mod input;
pub mod scenario;

pub use driver::HostDriver;
pub use idle::IdleClock;
pub use input::parse_request_line;
pub use scenario::Scenario;
