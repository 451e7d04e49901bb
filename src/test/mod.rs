mod registry;
mod timeline;

use crate::clinic::Priority;
use crate::random::Sampler;
use crate::sim::SimTime;
use std::collections::VecDeque;

/// Sampler that replays scripted draws. Exhausted gaps end the arrival
/// stream; exhausted priorities fall back to the untriaged tier.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSampler {
    gaps: VecDeque<f64>,
    priorities: VecDeque<Priority>,
    service: f64,
    pub(crate) priority_draws: usize,
}

impl ScriptedSampler {
    pub(crate) fn new(gaps: &[f64], service: f64) -> Self {
        Self {
            gaps: gaps.iter().copied().collect(),
            service,
            ..Self::default()
        }
    }

    pub(crate) fn with_priorities(mut self, priorities: &[Priority]) -> Self {
        self.priorities = priorities.iter().copied().collect();
        self
    }
}

impl Sampler for ScriptedSampler {
    fn inter_arrival_gap(&mut self, _now: SimTime) -> f64 {
        self.gaps.pop_front().unwrap_or(f64::INFINITY)
    }

    fn priority(&mut self) -> Priority {
        self.priority_draws += 1;
        self.priorities.pop_front().unwrap_or(Priority::UNTRIAGED)
    }

    fn service_duration(&mut self, _priority: Priority) -> f64 {
        self.service
    }
}
