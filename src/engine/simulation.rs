//! 仿真引擎
//!
//! A [`Simulation`] is the whole state of one run: registry, waiting queue,
//! timeline and statistics. It is built fresh for every run and consumed by
//! [`Simulation::run`], so nothing survives from one run to the next.

use super::progress::{Progress, ProgressFn};
use crate::clinic::{AvailabilityPolicy, DoctorId, PatientId, PatientState, Priority, Registry};
use crate::config::{ClinicConfig, ConfigError};
use crate::queue::{self, WaitingEntry, WaitingQueue};
use crate::random::{Sampler, SeededSampler};
use crate::sim::{Event, EventKind, SimTime, Timeline};
use crate::stats::{SimulationResults, StatsCollector};
use tracing::{debug, info, warn};

pub struct Simulation<S: Sampler> {
    cfg: ClinicConfig,
    sampler: S,
    policy: AvailabilityPolicy,
    registry: Registry,
    queue: Box<dyn WaitingQueue>,
    timeline: Timeline,
    stats: StatsCollector,
    arrivals: u64,
}

impl Simulation<SeededSampler> {
    /// Builds a run driven by the seeded default sampler.
    pub fn from_config(cfg: ClinicConfig) -> Result<Self, ConfigError> {
        let sampler = SeededSampler::from_config(&cfg);
        Self::new(cfg, sampler)
    }
}

impl<S: Sampler> Simulation<S> {
    /// Validates `cfg`, registers the doctors and pre-generates every arrival
    /// up to the horizon.
    pub fn new(cfg: ClinicConfig, sampler: S) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let people = if cfg.use_real_people {
            cfg.people.clone()
        } else {
            Vec::new()
        };
        let mut sim = Self {
            policy: AvailabilityPolicy::from_config(&cfg),
            registry: Registry::new(cfg.num_doctors, people),
            queue: queue::for_triage(cfg.use_triage),
            timeline: Timeline::default(),
            stats: StatsCollector::new(),
            arrivals: 0,
            sampler,
            cfg,
        };
        sim.schedule_arrivals();
        Ok(sim)
    }

    /// Draws gaps from the running clock until the horizon is passed, or until
    /// a positive gap no longer moves the clock in `f64`. Each accepted arrival
    /// is triaged here, at walk-in time.
    fn schedule_arrivals(&mut self) {
        let horizon = self.cfg.horizon_minutes;
        let mut t = SimTime::ZERO.after(self.sampler.inter_arrival_gap(SimTime::ZERO));
        while t.minutes() < horizon {
            let priority = if self.cfg.use_triage {
                self.sampler.priority()
            } else {
                Priority::UNTRIAGED
            };
            let patient = self.registry.add_patient(priority, t);
            self.timeline.schedule(t, EventKind::Arrival, patient);
            self.arrivals += 1;

            let gap = self.sampler.inter_arrival_gap(t);
            let next = t.after(gap);
            if gap > 0.0 && next <= t {
                warn!(now = ?t, gap, "clock no longer advances; arrivals stop here");
                break;
            }
            t = next;
        }
        self.stats.set_total_arrivals(self.arrivals);
        debug!(arrivals = self.arrivals, horizon, "arrivals pre-generated");
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn pending_events(&self) -> usize {
        self.timeline.len()
    }

    pub fn total_arrivals(&self) -> u64 {
        self.arrivals
    }

    /// Drains the timeline and returns the finalized results.
    #[tracing::instrument(
        skip(self, progress),
        fields(doctors = self.cfg.num_doctors, arrivals = self.arrivals)
    )]
    pub fn run(mut self, progress: Option<ProgressFn<'_>>) -> SimulationResults {
        info!("▶️  starting clinic run");
        let mut progress = Progress::new(progress, self.arrivals);

        while let Some(ev) = self.timeline.pop() {
            self.step(ev);
            progress.tick();
        }
        progress.finish();

        let left_waiting = self.queue.len() as u64;
        if left_waiting > 0 {
            warn!(left_waiting, "patients still queued when the timeline emptied");
        }
        let results = self.stats.finalize(
            self.registry.doctors(),
            self.cfg.horizon_minutes,
            left_waiting,
        );
        info!(
            events = progress.processed(),
            served = results.served,
            abandoned = results.abandoned,
            final_time = ?self.timeline.now(),
            "✅ clinic run complete"
        );
        results
    }

    fn step(&mut self, ev: Event) {
        let now = ev.at;
        self.prune_reneged(now);

        self.stats.sample(
            now,
            self.queue.len(),
            self.registry.busy_doctors(),
            self.registry.num_doctors(),
        );

        debug!(
            now = ?now,
            kind = ?ev.kind,
            patient = %self.registry.display_id(ev.patient),
            queue_len = self.queue.len(),
            "处理事件"
        );

        match ev.kind {
            EventKind::Arrival => self.on_arrival(ev.patient, now),
            EventKind::Departure => self.on_departure(ev.patient, now),
        }
    }

    fn prune_reneged(&mut self, now: SimTime) {
        for entry in self.queue.prune_reneged(now, self.cfg.max_wait_minutes) {
            self.registry.patient_mut(entry.patient).state = PatientState::Abandoned;
            self.stats.record_abandonment(entry.priority);
            debug!(
                patient = %self.registry.display_id(entry.patient),
                priority = %entry.priority,
                waited = now.since(entry.arrival),
                "patient abandoned the queue"
            );
        }
    }

    fn on_arrival(&mut self, pid: PatientId, now: SimTime) {
        let patient = self.registry.patient_mut(pid);
        patient.arrival = now;
        patient.wait_start = now;
        patient.state = PatientState::Waiting;
        let priority = patient.priority;

        match self.policy.select(self.registry.doctors_mut(), now) {
            Some(doctor) => self.start_service(doctor, pid, now),
            None => {
                self.queue.enqueue(WaitingEntry {
                    patient: pid,
                    arrival: now,
                    priority,
                });
                self.stats.observe_queue_len(self.queue.len());
            }
        }
    }

    fn on_departure(&mut self, pid: PatientId, now: SimTime) {
        let Some(doctor) = self.registry.doctor_serving(pid) else {
            warn!(patient = pid.0, "departure for a patient no doctor is serving");
            return;
        };
        self.registry.doctor_mut(doctor).release(now);

        let patient = self.registry.patient_mut(pid);
        patient.departure = Some(now);
        patient.state = PatientState::Departed;
        let (priority, wait, service) = (patient.priority, patient.wait, patient.service_duration);
        let total = now.since(patient.arrival);
        self.stats.record_served(priority, wait, service, total);

        // The doctor who just freed up takes the head of the queue directly.
        if let Some(next) = self.queue.dequeue() {
            self.start_service(doctor, next.patient, now);
        }
    }

    fn start_service(&mut self, doctor: DoctorId, pid: PatientId, now: SimTime) {
        let priority = self.registry.patient(pid).priority;
        let duration = self.sampler.service_duration(priority);

        self.registry.doctor_mut(doctor).seize(pid, now);
        let patient = self.registry.patient_mut(pid);
        patient.service_start = Some(now);
        patient.wait = now.since(patient.arrival);
        patient.service_duration = duration;
        patient.doctor = Some(doctor);
        patient.state = PatientState::InService;

        debug!(
            doctor = doctor.0,
            patient = pid.0,
            wait = patient.wait,
            duration,
            "consultation started"
        );
        self.timeline
            .schedule(now.after(duration), EventKind::Departure, pid);
    }
}
