//! 事件时间线
//!
//! Ordered multiset of pending events. Pops advance the clock.

use super::event::{Event, EventKind};
use super::time::SimTime;
use crate::clinic::PatientId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::trace;

/// Heap slot: the event plus its insertion sequence number, which breaks
/// timestamp ties.
#[derive(Debug)]
struct Pending {
    seq: u64,
    ev: Event,
}

impl Pending {
    fn key(&self) -> (SimTime, u64) {
        (self.ev.at, self.seq)
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

/// 事件时间线：维护当前时间与待处理事件。
#[derive(Debug, Default)]
pub struct Timeline {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<Reverse<Pending>>,
}

impl Timeline {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// 调度事件在指定时间执行
    pub fn schedule(&mut self, at: SimTime, kind: EventKind, patient: PatientId) {
        let seq = self.next_seq;
        trace!(now = ?self.now, at = ?at, ?kind, patient = patient.0, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(Reverse(Pending {
            seq,
            ev: Event { at, kind, patient },
        }));
    }

    /// Removes the earliest event and moves the clock to its timestamp.
    pub fn pop(&mut self) -> Option<Event> {
        let Reverse(item) = self.q.pop()?;
        self.now = item.ev.at;
        Some(item.ev)
    }

    pub fn peek_time(&self) -> Option<SimTime> {
        self.q.peek().map(|Reverse(item)| item.ev.at)
    }
}
