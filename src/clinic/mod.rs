//! 诊所实体
//!
//! Patients, doctors, the registry that owns them and the doctor
//! availability model.

mod availability;
mod doctor;
mod id;
mod patient;
mod person;
mod priority;
mod registry;

pub use availability::{AvailabilityPolicy, BreakRule};
pub use doctor::{Doctor, ShiftBand};
pub use id::{DoctorId, PatientId};
pub use patient::{Patient, PatientState};
pub use person::PersonRecord;
pub use priority::Priority;
pub use registry::Registry;
