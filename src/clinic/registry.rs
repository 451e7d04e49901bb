//! 实体注册表
//!
//! Owns every patient and doctor for one run, addressed by dense handles.

use super::doctor::Doctor;
use super::id::{DoctorId, PatientId};
use super::patient::Patient;
use super::person::PersonRecord;
use super::priority::Priority;
use crate::sim::SimTime;

#[derive(Debug, Default)]
pub struct Registry {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    people: Vec<PersonRecord>,
}

impl Registry {
    /// Registers `num_doctors` doctors; registration order fixes identity and
    /// shift band.
    pub fn new(num_doctors: usize, people: Vec<PersonRecord>) -> Self {
        let doctors = (0..num_doctors).map(|i| Doctor::new(DoctorId(i))).collect();
        Self {
            patients: Vec::new(),
            doctors,
            people,
        }
    }

    /// Creates a patient. When a people list is present, identities are
    /// cycled round-robin by arrival index.
    pub fn add_patient(&mut self, priority: Priority, arrival: SimTime) -> PatientId {
        let id = PatientId(self.patients.len());
        let person = (!self.people.is_empty()).then(|| id.0 % self.people.len());
        self.patients.push(Patient::new(id, person, priority, arrival));
        id
    }

    pub fn patient(&self, id: PatientId) -> &Patient {
        &self.patients[id.0]
    }

    pub fn patient_mut(&mut self, id: PatientId) -> &mut Patient {
        &mut self.patients[id.0]
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctor(&self, id: DoctorId) -> &Doctor {
        &self.doctors[id.0]
    }

    pub fn doctor_mut(&mut self, id: DoctorId) -> &mut Doctor {
        &mut self.doctors[id.0]
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctors_mut(&mut self) -> &mut [Doctor] {
        &mut self.doctors
    }

    pub fn num_doctors(&self) -> usize {
        self.doctors.len()
    }

    pub fn busy_doctors(&self) -> usize {
        self.doctors.iter().filter(|d| d.is_busy()).count()
    }

    /// Finds the doctor currently assigned to `patient`.
    pub fn doctor_serving(&self, patient: PatientId) -> Option<DoctorId> {
        self.doctors
            .iter()
            .find(|d| d.current == Some(patient))
            .map(|d| d.id)
    }

    pub fn person(&self, patient: PatientId) -> Option<&PersonRecord> {
        self.patient(patient).person.and_then(|i| self.people.get(i))
    }

    /// External identity: the person's id when enriched, `d<N>` otherwise.
    pub fn display_id(&self, patient: PatientId) -> String {
        match self.person(patient) {
            Some(p) => p.id.clone(),
            None => format!("d{}", patient.0),
        }
    }
}
