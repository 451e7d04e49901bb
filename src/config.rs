//! 仿真配置
//!
//! Consumed once per run and never mutated afterwards.

use crate::clinic::PersonRecord;
use crate::random::ServiceDistribution;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("num_doctors must be at least 1")]
    NoDoctors,
    #[error("arrival_rate must be positive and finite, got {0}")]
    ArrivalRate(f64),
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("shift_duration_minutes must be positive when shifts are enabled, got {0}")]
    ShiftDuration(f64),
    #[error("use_real_people is set but the people list is empty")]
    NoPeople,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub num_doctors: usize,
    /// Patients per minute.
    pub arrival_rate: f64,
    pub mean_service_minutes: f64,
    pub horizon_minutes: f64,
    pub service_distribution: ServiceDistribution,
    pub use_real_people: bool,
    pub people: Vec<PersonRecord>,
    pub use_triage: bool,
    /// Reneging threshold.
    pub max_wait_minutes: f64,
    pub use_shifts: bool,
    pub shift_duration_minutes: f64,
    pub use_breaks: bool,
    pub break_duration_minutes: f64,
    pub break_interval_minutes: f64,
    pub non_homogeneous_arrivals: bool,
    /// Fixes the random stream; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            num_doctors: 3,
            arrival_rate: 10.0 / 60.0,
            mean_service_minutes: 15.0,
            horizon_minutes: 480.0,
            service_distribution: ServiceDistribution::Exponential,
            use_real_people: false,
            people: Vec::new(),
            use_triage: false,
            max_wait_minutes: 120.0,
            use_shifts: false,
            shift_duration_minutes: 240.0,
            use_breaks: false,
            break_duration_minutes: 30.0,
            break_interval_minutes: 180.0,
            non_homogeneous_arrivals: false,
            seed: None,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl ClinicConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_doctors == 0 {
            return Err(ConfigError::NoDoctors);
        }
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return Err(ConfigError::ArrivalRate(self.arrival_rate));
        }
        non_negative("mean_service_minutes", self.mean_service_minutes)?;
        non_negative("horizon_minutes", self.horizon_minutes)?;
        non_negative("max_wait_minutes", self.max_wait_minutes)?;
        non_negative("break_duration_minutes", self.break_duration_minutes)?;
        non_negative("break_interval_minutes", self.break_interval_minutes)?;
        if self.use_shifts
            && !(self.shift_duration_minutes.is_finite() && self.shift_duration_minutes > 0.0)
        {
            return Err(ConfigError::ShiftDuration(self.shift_duration_minutes));
        }
        if self.use_real_people && self.people.is_empty() {
            return Err(ConfigError::NoPeople);
        }
        Ok(())
    }
}
