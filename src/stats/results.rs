//! Run output consumed by reporting and plotting hosts.

use crate::clinic::{Priority, ShiftBand};
use serde::{Deserialize, Serialize};

/// 每位医生的统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: String,
    pub shift: ShiftBand,
    /// Busy minutes, capped at the horizon.
    pub busy_time: f64,
    pub served: u64,
    /// Percent of the horizon spent serving, in `[0, 100]`.
    pub occupancy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub total_arrivals: u64,
    pub served: u64,
    pub abandoned: u64,
    /// Patients still queued when the timeline emptied. They are neither
    /// served nor abandoned and are left out of every rate below.
    pub left_waiting: u64,
    pub max_queue_len: usize,

    pub total_wait: f64,
    pub total_service: f64,
    pub total_time_in_clinic: f64,

    /// `(time, queue length)` sampled once per processed event.
    pub queue_history: Vec<(f64, usize)>,
    /// `(time, percent of doctors busy)` sampled once per processed event.
    pub occupancy_history: Vec<(f64, f64)>,

    pub wait_times: Vec<f64>,
    pub service_times: Vec<f64>,
    pub clinic_times: Vec<f64>,

    pub served_by_priority: [u64; Priority::COUNT],
    pub abandoned_by_priority: [u64; Priority::COUNT],
    pub waits_by_priority: [Vec<f64>; Priority::COUNT],

    pub mean_wait: f64,
    pub mean_service: f64,
    pub mean_time_in_clinic: f64,
    /// Percent of resolved patients (served + abandoned) who abandoned.
    pub abandonment_rate: f64,
    pub mean_queue_len: f64,
    pub mean_occupancy: f64,
    pub mean_wait_by_priority: [f64; Priority::COUNT],
    pub doctors: Vec<DoctorSummary>,
}

impl SimulationResults {
    pub fn served_for(&self, priority: Priority) -> u64 {
        self.served_by_priority[priority.index()]
    }

    pub fn abandoned_for(&self, priority: Priority) -> u64 {
        self.abandoned_by_priority[priority.index()]
    }

    pub fn mean_wait_for(&self, priority: Priority) -> f64 {
        self.mean_wait_by_priority[priority.index()]
    }
}
