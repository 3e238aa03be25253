pub mod demand;
pub mod demand_tests;
pub mod engine;
pub mod queues;

pub use engine::DispatchEngine;
