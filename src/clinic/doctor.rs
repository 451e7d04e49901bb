//! 医生记录
//!
//! A doctor serves at most one patient at a time and is never busy while on
//! break.

use super::id::{DoctorId, PatientId};
use crate::sim::SimTime;
use serde::{Deserialize, Serialize};

/// Alternating shift band; even registration indices work `Day`, odd `Night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftBand {
    Day,
    Night,
}

impl ShiftBand {
    pub fn for_index(index: usize) -> ShiftBand {
        if index % 2 == 0 {
            ShiftBand::Day
        } else {
            ShiftBand::Night
        }
    }

    /// Parity compared against `floor(now / shift) mod 2`.
    pub fn parity(self) -> u64 {
        match self {
            ShiftBand::Day => 0,
            ShiftBand::Night => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: DoctorId,
    pub shift: ShiftBand,
    pub current: Option<PatientId>,
    pub service_start: SimTime,
    pub busy_time: f64,
    pub served: u64,
    pub on_break: bool,
    pub break_end: SimTime,
    pub last_break_start: SimTime,
}

impl Doctor {
    pub fn new(id: DoctorId) -> Self {
        Self {
            id,
            shift: ShiftBand::for_index(id.0),
            current: None,
            service_start: SimTime::ZERO,
            busy_time: 0.0,
            served: 0,
            on_break: false,
            break_end: SimTime::ZERO,
            last_break_start: SimTime::ZERO,
        }
    }

    pub fn label(&self) -> String {
        format!("m{}", self.id.0)
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none() && !self.on_break
    }

    pub fn seize(&mut self, patient: PatientId, now: SimTime) {
        debug_assert!(self.current.is_none(), "doctor already busy");
        debug_assert!(!self.on_break, "doctor on break");
        self.current = Some(patient);
        self.service_start = now;
    }

    /// Ends the current consultation, returning who was being served.
    pub fn release(&mut self, now: SimTime) -> Option<PatientId> {
        let patient = self.current.take()?;
        self.busy_time += now.since(self.service_start);
        self.served += 1;
        Some(patient)
    }

    pub fn start_break(&mut self, now: SimTime, duration: f64) {
        self.on_break = true;
        self.break_end = now.after(duration);
        self.last_break_start = now;
    }
}
