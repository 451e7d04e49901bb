//! 病人记录

use super::id::{DoctorId, PatientId};
use super::priority::Priority;
use crate::sim::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientState {
    /// Arrival generated but not yet processed.
    Expected,
    Waiting,
    InService,
    Departed,
    Abandoned,
}

#[derive(Debug, Clone)]
pub struct Patient {
    pub id: PatientId,
    /// Index into the injected people list, if identities come from there.
    pub person: Option<usize>,
    pub priority: Priority,
    pub arrival: SimTime,
    pub wait_start: SimTime,
    pub service_start: Option<SimTime>,
    pub service_duration: f64,
    pub departure: Option<SimTime>,
    pub wait: f64,
    pub doctor: Option<DoctorId>,
    pub state: PatientState,
}

impl Patient {
    pub fn new(id: PatientId, person: Option<usize>, priority: Priority, arrival: SimTime) -> Self {
        Self {
            id,
            person,
            priority,
            arrival,
            wait_start: arrival,
            service_start: None,
            service_duration: 0.0,
            departure: None,
            wait: 0.0,
            doctor: None,
            state: PatientState::Expected,
        }
    }
}
