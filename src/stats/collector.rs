//! 统计聚合器
//!
//! Written incrementally by the event loop, finalized once at run end.

use super::results::{DoctorSummary, SimulationResults};
use crate::clinic::{Doctor, Priority};
use crate::sim::SimTime;

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

fn mean(values: &[f64]) -> f64 {
    ratio(values.iter().sum(), values.len() as f64)
}

#[derive(Debug, Default)]
pub struct StatsCollector {
    r: SimulationResults,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total_arrivals(&mut self, n: u64) {
        self.r.total_arrivals = n;
    }

    /// One queue-length and occupancy sample at `now`.
    pub fn sample(&mut self, now: SimTime, queue_len: usize, busy: usize, num_doctors: usize) {
        self.r.queue_history.push((now.minutes(), queue_len));
        let occupancy = ratio(busy as f64, num_doctors as f64) * 100.0;
        self.r.occupancy_history.push((now.minutes(), occupancy));
    }

    pub fn observe_queue_len(&mut self, len: usize) {
        self.r.max_queue_len = self.r.max_queue_len.max(len);
    }

    pub fn record_abandonment(&mut self, priority: Priority) {
        self.r.abandoned += 1;
        self.r.abandoned_by_priority[priority.index()] += 1;
    }

    pub fn record_served(&mut self, priority: Priority, wait: f64, service: f64, total: f64) {
        let r = &mut self.r;
        r.served += 1;
        r.total_wait += wait;
        r.total_service += service;
        r.total_time_in_clinic += total;
        r.wait_times.push(wait);
        r.service_times.push(service);
        r.clinic_times.push(total);
        r.served_by_priority[priority.index()] += 1;
        r.waits_by_priority[priority.index()].push(wait);
    }

    /// Computes every derived metric. All divisions default to 0.0 on a zero
    /// denominator.
    pub fn finalize(
        self,
        doctors: &[Doctor],
        horizon: f64,
        left_waiting: u64,
    ) -> SimulationResults {
        let mut r = self.r;
        r.left_waiting = left_waiting;

        let n = r.served as f64;
        r.mean_wait = ratio(r.total_wait, n);
        r.mean_service = ratio(r.total_service, n);
        r.mean_time_in_clinic = ratio(r.total_time_in_clinic, n);
        r.abandonment_rate = ratio(r.abandoned as f64, (r.served + r.abandoned) as f64) * 100.0;

        let queue_total: f64 = r.queue_history.iter().map(|&(_, len)| len as f64).sum();
        r.mean_queue_len = ratio(queue_total, r.queue_history.len() as f64);

        r.doctors = doctors
            .iter()
            .map(|d| {
                let busy_time = d.busy_time.min(horizon);
                DoctorSummary {
                    id: d.label(),
                    shift: d.shift,
                    busy_time,
                    served: d.served,
                    occupancy: (ratio(busy_time, horizon) * 100.0).min(100.0),
                }
            })
            .collect();
        let occupancies: Vec<f64> = r.doctors.iter().map(|d| d.occupancy).collect();
        r.mean_occupancy = mean(&occupancies);

        for p in Priority::ALL {
            r.mean_wait_by_priority[p.index()] = mean(&r.waits_by_priority[p.index()]);
        }
        r
    }
}
