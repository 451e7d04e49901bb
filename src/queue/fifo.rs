//! FIFO 队列
//!
//! Arrival order only; priority is ignored.

use std::collections::VecDeque;

use crate::sim::SimTime;

use super::{WaitingEntry, WaitingQueue};

#[derive(Debug, Default)]
pub struct FifoQueue {
    q: VecDeque<WaitingEntry>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WaitingQueue for FifoQueue {
    fn enqueue(&mut self, entry: WaitingEntry) {
        self.q.push_back(entry);
    }

    fn dequeue(&mut self) -> Option<WaitingEntry> {
        self.q.pop_front()
    }

    fn prune_reneged(&mut self, now: SimTime, max_wait: f64) -> Vec<WaitingEntry> {
        let mut gone = Vec::new();
        self.q.retain(|e| {
            if e.has_reneged(now, max_wait) {
                gone.push(*e);
                false
            } else {
                true
            }
        });
        gone
    }

    fn len(&self) -> usize {
        self.q.len()
    }
}
