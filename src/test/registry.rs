use crate::clinic::{DoctorId, PatientId, PatientState, PersonRecord, Priority, Registry};
use crate::sim::SimTime;

#[test]
fn patients_get_dense_ids_and_generated_labels() {
    let mut reg = Registry::new(2, Vec::new());
    let a = reg.add_patient(Priority::Green, SimTime(1.0));
    let b = reg.add_patient(Priority::Red, SimTime(2.0));

    assert_eq!((a, b), (PatientId(0), PatientId(1)));
    assert_eq!(reg.display_id(b), "d1");
    assert!(reg.person(a).is_none());
    assert_eq!(reg.patient(b).priority, Priority::Red);
    assert_eq!(reg.patient(b).wait_start, SimTime(2.0));
    assert_eq!(reg.patient(b).state, PatientState::Expected);
}

#[test]
fn people_are_cycled_round_robin_by_arrival_index() {
    let people = vec![PersonRecord::new("ana"), PersonRecord::new("rui")];
    let mut reg = Registry::new(1, people);
    let ids: Vec<PatientId> = (0..5)
        .map(|i| reg.add_patient(Priority::Green, SimTime(i as f64)))
        .collect();

    let labels: Vec<String> = ids.iter().map(|&p| reg.display_id(p)).collect();
    assert_eq!(labels, vec!["ana", "rui", "ana", "rui", "ana"]);
}

#[test]
fn person_records_keep_extra_attributes() {
    let raw = r#"{ "id": "p7", "name": "Marta", "idade": 41, "cidade": "Braga" }"#;
    let person: PersonRecord = serde_json::from_str(raw).expect("parse person");
    assert_eq!(person.id, "p7");
    assert_eq!(person.name.as_deref(), Some("Marta"));
    assert_eq!(person.attributes.len(), 2);
    assert_eq!(person.attributes["idade"], serde_json::json!(41));
}

#[test]
fn doctor_serving_finds_the_assigned_doctor() {
    let mut reg = Registry::new(3, Vec::new());
    let p = reg.add_patient(Priority::Green, SimTime::ZERO);
    assert_eq!(reg.doctor_serving(p), None);

    reg.doctor_mut(DoctorId(2)).seize(p, SimTime::ZERO);
    assert_eq!(reg.doctor_serving(p), Some(DoctorId(2)));
    assert_eq!(reg.busy_doctors(), 1);

    let released = reg.doctor_mut(DoctorId(2)).release(SimTime(12.0));
    assert_eq!(released, Some(p));
    assert_eq!(reg.doctor(DoctorId(2)).busy_time, 12.0);
    assert_eq!(reg.doctor(DoctorId(2)).served, 1);
    assert_eq!(reg.busy_doctors(), 0);
}

#[test]
fn releasing_an_idle_doctor_is_a_no_op() {
    let mut reg = Registry::new(1, Vec::new());
    assert_eq!(reg.doctor_mut(DoctorId(0)).release(SimTime(5.0)), None);
    assert_eq!(reg.doctor(DoctorId(0)).served, 0);
    assert_eq!(reg.doctor(DoctorId(0)).busy_time, 0.0);
}
