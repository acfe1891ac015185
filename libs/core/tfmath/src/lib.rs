pub mod boundary;
pub mod combine;
pub mod num;
pub mod sampled;

mod config;

pub use config::{DuplicatePolicy, EngineConfig, InvalidTolerance, NonFinitePolicy, Tolerance};
