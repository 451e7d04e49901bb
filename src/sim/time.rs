//! 仿真时间类型
//!
//! Simulated time in minutes since the start of the run. Time is abstract and
//! never paced against the wall clock.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// 仿真时间（分钟）。
///
/// Ordered with `f64::total_cmp` so it can key the event heap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    pub fn from_minutes(m: f64) -> SimTime {
        SimTime(m)
    }

    pub fn from_hours(h: f64) -> SimTime {
        SimTime(h * MINUTES_PER_HOUR)
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Hour on a 24-hour wraparound clock, in `[0, 24)`.
    pub fn hour_of_day(self) -> f64 {
        self.0.rem_euclid(MINUTES_PER_DAY) / MINUTES_PER_HOUR
    }

    pub fn after(self, minutes: f64) -> SimTime {
        SimTime(self.0 + minutes)
    }

    /// Minutes elapsed from `earlier` to `self`.
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
