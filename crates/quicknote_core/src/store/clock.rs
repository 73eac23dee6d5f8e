//! Clock abstraction for note timestamps.
//!
//! # Responsibility
//! - Supply epoch-millisecond timestamps to the store.
//! - Guarantee the issued sequence is monotonically non-decreasing.
//!
//! # Invariants
//! - `now_epoch_ms` never returns a value smaller than a previous return.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp source injected into the store.
///
/// Production code uses [`SystemClock`]; tests inject a scripted clock to make
/// recency ordering deterministic.
pub trait Clock: Send {
    /// Returns the current time in epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock backed [`Clock`] with a monotonic floor.
///
/// Wall time can step backwards (NTP adjustments); recency ordering must not.
/// Each reading is clamped against the last issued value.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_issued_ms: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        let wall_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);

        let mut floor = self.last_issued_ms.load(Ordering::Acquire);
        loop {
            let candidate = wall_ms.max(floor);
            match self.last_issued_ms.compare_exchange_weak(
                floor,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(current) => floor = current,
            }
        }
    }
}
