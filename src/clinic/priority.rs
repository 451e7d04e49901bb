//! Triage priority tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier, 1 (most urgent) to 5 (least urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Red = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Blue = 5,
}

impl Priority {
    pub const COUNT: usize = 5;
    pub const ALL: [Priority; Priority::COUNT] = [
        Priority::Red,
        Priority::Orange,
        Priority::Yellow,
        Priority::Green,
        Priority::Blue,
    ];

    /// Tier assigned to every patient when triage is disabled.
    pub const UNTRIAGED: Priority = Priority::Green;

    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Zero-based slot, handy for per-tier tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// The two most urgent tiers get a shortened consultation.
    pub fn is_urgent(self) -> bool {
        self <= Priority::Orange
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Red => "Red (emergency)",
            Priority::Orange => "Orange (very urgent)",
            Priority::Yellow => "Yellow (urgent)",
            Priority::Green => "Green (less urgent)",
            Priority::Blue => "Blue (not urgent)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.tier())
    }
}
