//! 仿真引擎模块
//!
//! Event loop that binds patients to doctors, plus progress reporting.

mod progress;
mod simulation;

pub use progress::{PROGRESS_EVERY, ProgressFn};
pub use simulation::Simulation;

use crate::config::{ClinicConfig, ConfigError};
use crate::stats::SimulationResults;

/// Runs one simulation with the seeded default sampler.
pub fn simulate(cfg: ClinicConfig) -> Result<SimulationResults, ConfigError> {
    Ok(Simulation::from_config(cfg)?.run(None))
}

/// Same as [`simulate`], reporting progress percentages to `progress`.
pub fn simulate_with_progress(
    cfg: ClinicConfig,
    progress: &mut dyn FnMut(u8),
) -> Result<SimulationResults, ConfigError> {
    Ok(Simulation::from_config(cfg)?.run(Some(progress)))
}
