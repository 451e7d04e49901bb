//! Triage draw: categorical over fixed tier probabilities.

use crate::clinic::Priority;
use rand::Rng;

/// Cumulative upper bounds: 5%, 10%, 20%, 35%, 30%.
pub const TRIAGE_CUMULATIVE: [(f64, Priority); Priority::COUNT] = [
    (0.05, Priority::Red),
    (0.15, Priority::Orange),
    (0.35, Priority::Yellow),
    (0.70, Priority::Green),
    (1.00, Priority::Blue),
];

/// Maps a uniform draw in `[0, 1)` onto a tier.
pub fn priority_for(u: f64) -> Priority {
    TRIAGE_CUMULATIVE
        .iter()
        .find(|&&(bound, _)| u < bound)
        .map(|&(_, p)| p)
        .unwrap_or(Priority::Blue)
}

pub fn sample_priority<R: Rng + ?Sized>(rng: &mut R) -> Priority {
    priority_for(rng.gen_range(0.0..1.0))
}
