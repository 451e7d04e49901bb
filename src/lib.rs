pub mod clinic;
pub mod config;
pub mod engine;
pub mod queue;
pub mod random;
pub mod sim;
pub mod stats;

pub use config::{ClinicConfig, ConfigError};
pub use engine::{Simulation, simulate, simulate_with_progress};
pub use stats::SimulationResults;

#[cfg(test)]
mod test;
