//! 医生可用性模型
//!
//! Gating of doctors by shift band and break rules, split in two phases:
//! [`AvailabilityPolicy::advance`] moves every on-shift doctor's break state
//! forward to `now`, and [`AvailabilityPolicy::find_free`] is a pure scan for
//! the first idle doctor in registration order.

use super::doctor::Doctor;
use super::id::DoctorId;
use crate::config::ClinicConfig;
use crate::sim::SimTime;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakRule {
    pub duration: f64,
    pub interval: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvailabilityPolicy {
    /// Shift length in minutes when shifts are enabled.
    pub shift_duration: Option<f64>,
    pub breaks: Option<BreakRule>,
}

impl AvailabilityPolicy {
    pub fn from_config(cfg: &ClinicConfig) -> Self {
        Self {
            shift_duration: cfg.use_shifts.then_some(cfg.shift_duration_minutes),
            breaks: cfg.use_breaks.then_some(BreakRule {
                duration: cfg.break_duration_minutes,
                interval: cfg.break_interval_minutes,
            }),
        }
    }

    /// `floor(now / shift) mod 2`, or `None` with shifts disabled.
    pub fn shift_cycle(&self, now: SimTime) -> Option<u64> {
        self.shift_duration
            .map(|len| ((now.minutes() / len).floor() as u64) % 2)
    }

    pub fn on_shift(&self, doctor: &Doctor, now: SimTime) -> bool {
        match self.shift_cycle(now) {
            Some(cycle) => doctor.shift.parity() == cycle,
            None => true,
        }
    }

    /// Advances break state of every on-shift doctor to `now`.
    ///
    /// Off-shift doctors are left untouched. A finished break is cleared
    /// first; then an idle doctor whose time since the last break start has
    /// reached the interval goes on break starting now.
    pub fn advance(&self, doctors: &mut [Doctor], now: SimTime) {
        for doctor in doctors.iter_mut() {
            if !self.on_shift(doctor, now) {
                continue;
            }

            if doctor.on_break {
                if now >= doctor.break_end {
                    doctor.on_break = false;
                    debug!(doctor = doctor.id.0, now = ?now, "break over");
                } else {
                    continue;
                }
            }

            if let Some(rule) = self.breaks {
                if !doctor.is_busy() && now.since(doctor.last_break_start) >= rule.interval {
                    doctor.start_break(now, rule.duration);
                    debug!(
                        doctor = doctor.id.0,
                        now = ?now,
                        until = ?doctor.break_end,
                        "break started"
                    );
                }
            }
        }
    }

    /// First idle, on-shift, not-on-break doctor in registration order.
    pub fn find_free(&self, doctors: &[Doctor], now: SimTime) -> Option<DoctorId> {
        doctors
            .iter()
            .find(|d| self.on_shift(d, now) && d.is_idle())
            .map(|d| d.id)
    }

    /// One decision point: advance, then scan.
    pub fn select(&self, doctors: &mut [Doctor], now: SimTime) -> Option<DoctorId> {
        self.advance(doctors, now);
        self.find_free(doctors, now)
    }
}
