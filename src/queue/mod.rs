//! 等待队列策略
//!
//! Two disciplines: plain FIFO when triage is off, and priority lanes (FIFO
//! inside each tier) when triage is on. Both support reneging purges.

use crate::clinic::{PatientId, Priority};
use crate::sim::SimTime;

mod fifo;
mod triage;

pub use fifo::FifoQueue;
pub use triage::TriageQueue;

/// Lightweight queue record, distinct from the full patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingEntry {
    pub patient: PatientId,
    pub arrival: SimTime,
    pub priority: Priority,
}

impl WaitingEntry {
    /// Strictly longer than `max_wait` counts as reneged.
    pub fn has_reneged(&self, now: SimTime, max_wait: f64) -> bool {
        now.since(self.arrival) > max_wait
    }
}

/// 等待队列抽象
pub trait WaitingQueue: std::fmt::Debug {
    fn enqueue(&mut self, entry: WaitingEntry);
    /// 出队：按队列策略返回下一个病人
    fn dequeue(&mut self) -> Option<WaitingEntry>;
    /// Removes and returns every entry that has waited longer than `max_wait`.
    fn prune_reneged(&mut self, now: SimTime, max_wait: f64) -> Vec<WaitingEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn for_triage(use_triage: bool) -> Box<dyn WaitingQueue> {
    if use_triage {
        Box::new(TriageQueue::new())
    } else {
        Box::new(FifoQueue::new())
    }
}
