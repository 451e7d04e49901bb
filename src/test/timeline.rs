use crate::clinic::PatientId;
use crate::sim::{EventKind, SimTime, Timeline};

#[test]
fn scheduled_events_order_by_time_then_seq() {
    let mut tl = Timeline::default();
    tl.schedule(SimTime(10.0), EventKind::Arrival, PatientId(1));
    tl.schedule(SimTime(5.0), EventKind::Arrival, PatientId(2));
    tl.schedule(SimTime(10.0), EventKind::Departure, PatientId(3));

    let order: Vec<usize> = std::iter::from_fn(|| tl.pop()).map(|e| e.patient.0).collect();
    assert_eq!(order, vec![2, 1, 3]);
    assert_eq!(tl.now(), SimTime(10.0));
    assert!(tl.is_empty());
}

#[test]
fn pop_advances_clock_to_event_time() {
    let mut tl = Timeline::default();
    tl.schedule(SimTime(3.5), EventKind::Arrival, PatientId(0));
    assert_eq!(tl.now(), SimTime::ZERO);
    assert_eq!(tl.peek_time(), Some(SimTime(3.5)));

    let ev = tl.pop().expect("event");
    assert_eq!(ev.at, SimTime(3.5));
    assert_eq!(ev.kind, EventKind::Arrival);
    assert_eq!(tl.now(), SimTime(3.5));
    assert!(tl.pop().is_none());
}

#[test]
fn event_scheduled_at_current_time_runs_after_pending_ties() {
    let mut tl = Timeline::default();
    tl.schedule(SimTime(10.0), EventKind::Arrival, PatientId(0));
    tl.schedule(SimTime(10.0), EventKind::Arrival, PatientId(1));

    let first = tl.pop().expect("event");
    assert_eq!(first.patient, PatientId(0));
    // A departure created while handling t=10 still queues behind the other
    // arrival already waiting at t=10.
    tl.schedule(tl.now(), EventKind::Departure, PatientId(0));

    let second = tl.pop().expect("event");
    assert_eq!((second.patient, second.kind), (PatientId(1), EventKind::Arrival));
    let third = tl.pop().expect("event");
    assert_eq!((third.patient, third.kind), (PatientId(0), EventKind::Departure));
}

#[test]
fn len_tracks_pending_events() {
    let mut tl = Timeline::default();
    assert_eq!(tl.len(), 0);
    for i in 0..4 {
        tl.schedule(SimTime(i as f64), EventKind::Arrival, PatientId(i));
    }
    assert_eq!(tl.len(), 4);
    tl.pop();
    assert_eq!(tl.len(), 3);
}

#[test]
fn popped_events_never_run_backwards() {
    let mut tl = Timeline::default();
    for (i, at) in [7.0, 1.0, 4.0, 1.0, 9.5, 4.0].into_iter().enumerate() {
        tl.schedule(SimTime(at), EventKind::Arrival, PatientId(i));
    }

    let mut seen = Vec::new();
    while let Some(peeked) = tl.peek_time() {
        let ev = tl.pop().expect("event");
        assert_eq!(ev.at, peeked);
        assert_eq!(tl.now(), ev.at);
        seen.push((ev.at.minutes(), ev.patient.0));
    }
    assert_eq!(
        seen,
        vec![(1.0, 1), (1.0, 3), (4.0, 2), (4.0, 5), (7.0, 0), (9.5, 4)]
    );
}
