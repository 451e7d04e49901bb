//! Progress reporting.
//!
//! The callback runs synchronously on the engine's thread and only sees a
//! percentage; it cannot touch engine state.

/// Callback cadence, in processed events.
pub const PROGRESS_EVERY: u64 = 10;

pub type ProgressFn<'a> = &'a mut dyn FnMut(u8);

pub(crate) struct Progress<'a> {
    cb: Option<ProgressFn<'a>>,
    /// Events known up front (the pre-generated arrivals).
    total: u64,
    processed: u64,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(cb: Option<ProgressFn<'a>>, total: u64) -> Self {
        Self {
            cb,
            total,
            processed: 0,
        }
    }

    /// Percent of the pre-generated events processed, capped at 100 because
    /// departures are processed on top of them.
    pub(crate) fn percent(&self) -> u8 {
        let pct = self.processed.saturating_mul(100) / self.total.max(1);
        pct.min(100) as u8
    }

    pub(crate) fn tick(&mut self) {
        self.processed += 1;
        if self.processed % PROGRESS_EVERY == 0 {
            let pct = self.percent();
            if let Some(cb) = self.cb.as_mut() {
                cb(pct);
            }
        }
    }

    pub(crate) fn finish(&mut self) {
        if let Some(cb) = self.cb.as_mut() {
            cb(100);
        }
    }

    pub(crate) fn processed(&self) -> u64 {
        self.processed
    }
}
