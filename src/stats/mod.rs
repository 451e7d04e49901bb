//! 统计信息
//!
//! Running counters and the finalized results structure.

mod collector;
mod results;

pub use collector::StatsCollector;
pub use results::{DoctorSummary, SimulationResults};
