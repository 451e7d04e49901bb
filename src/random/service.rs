//! Service (consultation) durations.

use crate::clinic::Priority;
use rand::Rng;
use rand_distr::{Distribution, Exp1, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor applied to normal draws and to the uniform lower bound, in minutes.
pub const MIN_SERVICE_MINUTES: f64 = 5.0;
/// Urgent tiers are seen 30% faster.
pub const URGENT_SERVICE_FACTOR: f64 = 0.7;

/// Distribution family. Any unrecognised name maps to `Constant`, which
/// always returns the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceDistribution {
    #[default]
    Exponential,
    Normal,
    Uniform,
    Constant,
}

impl From<&str> for ServiceDistribution {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "exponential" => ServiceDistribution::Exponential,
            "normal" => ServiceDistribution::Normal,
            "uniform" => ServiceDistribution::Uniform,
            _ => ServiceDistribution::Constant,
        }
    }
}

impl From<String> for ServiceDistribution {
    fn from(name: String) -> Self {
        ServiceDistribution::from(name.as_str())
    }
}

impl From<ServiceDistribution> for String {
    fn from(d: ServiceDistribution) -> Self {
        d.to_string()
    }
}

impl fmt::Display for ServiceDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceDistribution::Exponential => "exponential",
            ServiceDistribution::Normal => "normal",
            ServiceDistribution::Uniform => "uniform",
            ServiceDistribution::Constant => "constant",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceModel {
    pub mean_minutes: f64,
    pub distribution: ServiceDistribution,
}

impl ServiceModel {
    pub fn new(mean_minutes: f64, distribution: ServiceDistribution) -> Self {
        Self {
            mean_minutes,
            distribution,
        }
    }

    pub fn mean_for(&self, priority: Priority) -> f64 {
        if priority.is_urgent() {
            self.mean_minutes * URGENT_SERVICE_FACTOR
        } else {
            self.mean_minutes
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, priority: Priority) -> f64 {
        let mean = self.mean_for(priority);
        match self.distribution {
            ServiceDistribution::Exponential => {
                let e: f64 = rng.sample(Exp1);
                e * mean
            }
            ServiceDistribution::Normal => match Normal::new(mean, mean * 0.3) {
                Ok(normal) => normal.sample(rng).max(MIN_SERVICE_MINUTES),
                Err(_) => mean,
            },
            ServiceDistribution::Uniform => {
                let lo = MIN_SERVICE_MINUTES.max(mean * 0.4);
                let hi = mean * 1.6;
                // Short means can invert the bounds; draw over the ordered span.
                let (lo, hi) = (lo.min(hi), lo.max(hi));
                if hi > lo { rng.gen_range(lo..hi) } else { lo }
            }
            ServiceDistribution::Constant => mean,
        }
    }
}
