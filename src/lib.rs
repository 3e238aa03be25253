//! Single-car elevator dispatch simulation.
//!
//! The [`dispatch`] module holds the engine: floor queues, the car and the
//! rules deciding where the car goes each tick. The [`host`] module is a
//! headless presentation layer that paces ticks and feeds in passengers.

/* Modules */
pub mod config;
pub mod dispatch;
pub mod host;
pub mod shared;

pub use config::{Config, DispatchConfig, HostConfig};
pub use dispatch::DispatchEngine;
pub use host::{HostDriver, Scenario};
pub use shared::{Direction, DispatchError, PassengerId, PassengerState, TickResult};
