use chrono::{DateTime, Local, TimeZone};
use std::cell::Cell;

/// Source of "now" for everything that timestamps or measures a session.
/// Injected so tests can pin the wall clock.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
pub struct FixedClock {
    now: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Test helper: pinned at a local wall-clock time.
    ///
    /// # Panics
    /// If the time does not exist in the local zone (DST gap).
    pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Self {
        Self::new(local(y, mo, d, h, mi, s).expect("valid local time"))
    }

    pub fn set(&self, now: DateTime<Local>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

/// Local timestamp for a wall-clock time; the earlier one when ambiguous.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Option<DateTime<Local>> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).earliest()
}

/// Convert epoch millis back to local time.
pub fn from_millis(ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ms).single()
}
