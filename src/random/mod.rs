//! 随机过程
//!
//! Generators for inter-arrival gaps, triage tiers and consultation lengths.

mod arrival;
mod sampler;
mod service;
mod triage;

pub use arrival::{
    ArrivalProcess, PEAK_HOURS, PEAK_MULTIPLIER, TROUGH_HOURS, TROUGH_MULTIPLIER, rate_multiplier,
};
pub use sampler::{Sampler, SeededSampler};
pub use service::{MIN_SERVICE_MINUTES, ServiceDistribution, ServiceModel, URGENT_SERVICE_FACTOR};
pub use triage::{TRIAGE_CUMULATIVE, priority_for, sample_priority};
