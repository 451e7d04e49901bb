//! Arrival process.
//!
//! Inter-arrival gaps are exponential. With time-of-day modulation the base
//! rate is scaled by a multiplier looked up on a 24-hour wraparound clock.

use crate::sim::SimTime;
use rand::Rng;
use rand_distr::Exp1;

pub const PEAK_MULTIPLIER: f64 = 1.5;
pub const TROUGH_MULTIPLIER: f64 = 0.5;

/// Peak windows, `[start, end)` in hours.
pub const PEAK_HOURS: [(f64, f64); 2] = [(9.0, 11.0), (14.0, 17.0)];
/// Trough windows, `[start, end)` in hours.
pub const TROUGH_HOURS: [(f64, f64); 2] = [(12.0, 14.0), (20.0, 24.0)];

fn within(hour: f64, windows: &[(f64, f64)]) -> bool {
    windows.iter().any(|&(start, end)| hour >= start && hour < end)
}

/// Rate multiplier for the hour of day at `now`.
pub fn rate_multiplier(now: SimTime) -> f64 {
    let hour = now.hour_of_day();
    if within(hour, &PEAK_HOURS) {
        PEAK_MULTIPLIER
    } else if within(hour, &TROUGH_HOURS) {
        TROUGH_MULTIPLIER
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalProcess {
    /// Patients per minute.
    pub base_rate: f64,
    pub time_of_day: bool,
}

impl ArrivalProcess {
    pub fn new(base_rate: f64, time_of_day: bool) -> Self {
        Self {
            base_rate,
            time_of_day,
        }
    }

    pub fn effective_rate(&self, now: SimTime) -> f64 {
        if self.time_of_day {
            self.base_rate * rate_multiplier(now)
        } else {
            self.base_rate
        }
    }

    /// Exponential gap with mean `1 / effective_rate(now)`.
    pub fn sample_gap<R: Rng + ?Sized>(&self, rng: &mut R, now: SimTime) -> f64 {
        let rate = self.effective_rate(now);
        if rate <= 0.0 {
            return f64::INFINITY;
        }
        let e: f64 = rng.sample(Exp1);
        e / rate
    }
}
