//! 事件
//!
//! Events are plain immutable records; the timeline only inserts and pops them.

use super::time::SimTime;
use crate::clinic::PatientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Arrival,
    Departure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub at: SimTime,
    pub kind: EventKind,
    pub patient: PatientId,
}
