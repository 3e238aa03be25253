pub mod error;
pub mod macros;
pub mod structs;

pub use error::{ConfigError, DispatchError, InputError, ScenarioError};
pub use structs::Direction;
pub use structs::Floor;
pub use structs::Handle;
pub use structs::Passenger;
pub use structs::PassengerId;
pub use structs::PassengerRequest;
pub use structs::PassengerState;
pub use structs::TickResult;
