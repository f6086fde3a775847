use chrono::{DateTime, Utc};

/// Source of the current time for callers of the engine.
///
/// Every engine operation takes the clock reading as an explicit argument, so
/// phase is computed on demand and never advanced by a background process.
/// Embedding layers inject an implementation of this trait to obtain the
/// reading; tests use [`FixedClock`] for determinism.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
