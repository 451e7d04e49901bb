//! Source of every stochastic draw the engine makes.
//!
//! The engine only talks to [`Sampler`], so tests can script arrivals and
//! consultation lengths exactly.

use super::arrival::ArrivalProcess;
use super::service::ServiceModel;
use super::triage::sample_priority;
use crate::clinic::Priority;
use crate::config::ClinicConfig;
use crate::sim::SimTime;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub trait Sampler {
    /// Minutes until the next walk-in, drawn at `now`.
    fn inter_arrival_gap(&mut self, now: SimTime) -> f64;
    fn priority(&mut self) -> Priority;
    fn service_duration(&mut self, priority: Priority) -> f64;
}

/// Default sampler backed by a single `StdRng` stream.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
    arrivals: ArrivalProcess,
    service: ServiceModel,
}

impl SeededSampler {
    pub fn new(arrivals: ArrivalProcess, service: ServiceModel, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            arrivals,
            service,
        }
    }

    pub fn from_config(cfg: &ClinicConfig) -> Self {
        Self::new(
            ArrivalProcess::new(cfg.arrival_rate, cfg.non_homogeneous_arrivals),
            ServiceModel::new(cfg.mean_service_minutes, cfg.service_distribution),
            cfg.seed,
        )
    }
}

impl Sampler for SeededSampler {
    fn inter_arrival_gap(&mut self, now: SimTime) -> f64 {
        self.arrivals.sample_gap(&mut self.rng, now)
    }

    fn priority(&mut self) -> Priority {
        sample_priority(&mut self.rng)
    }

    fn service_duration(&mut self, priority: Priority) -> f64 {
        self.service.sample(&mut self.rng, priority)
    }
}
