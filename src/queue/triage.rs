//! Triage queue.
//!
//! One FIFO lane per priority tier. Dequeue takes the head of the most
//! urgent non-empty lane, which gives ascending tier order with arrival order
//! preserved inside a tier, the same order as stable sorted insertion.

use std::collections::VecDeque;

use crate::clinic::Priority;
use crate::sim::SimTime;

use super::{WaitingEntry, WaitingQueue};

#[derive(Debug, Default)]
pub struct TriageQueue {
    lanes: [VecDeque<WaitingEntry>; Priority::COUNT],
}

impl TriageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len_of(&self, priority: Priority) -> usize {
        self.lanes[priority.index()].len()
    }
}

impl WaitingQueue for TriageQueue {
    fn enqueue(&mut self, entry: WaitingEntry) {
        self.lanes[entry.priority.index()].push_back(entry);
    }

    fn dequeue(&mut self) -> Option<WaitingEntry> {
        self.lanes.iter_mut().find_map(|lane| lane.pop_front())
    }

    fn prune_reneged(&mut self, now: SimTime, max_wait: f64) -> Vec<WaitingEntry> {
        let mut gone = Vec::new();
        for lane in self.lanes.iter_mut() {
            lane.retain(|e| {
                if e.has_reneged(now, max_wait) {
                    gone.push(*e);
                    false
                } else {
                    true
                }
            });
        }
        gone
    }

    fn len(&self) -> usize {
        self.lanes.iter().map(VecDeque::len).sum()
    }
}
