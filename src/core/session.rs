//! Session clock: the in-progress work interval.
//!
//! The start instant lives in exactly one place, this struct, and is mirrored
//! to local storage only through [`SessionClock::restore`], [`SessionClock::start`]
//! and [`SessionClock::clear`].

use crate::core::clock::{Clock, from_millis};
use crate::errors::{AppError, AppResult};
use crate::storage::{LocalStorage, START_TIME_KEY};
use crate::ui::messages::warning;
use std::io::Write;
use std::time::Duration;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

pub struct SessionClock<'a> {
    storage: &'a dyn LocalStorage,
    start: Option<i64>,
}

impl<'a> SessionClock<'a> {
    /// Recover the session from local storage; idle when nothing (valid) is stored.
    pub fn restore(storage: &'a dyn LocalStorage) -> AppResult<Self> {
        let start = match storage.get(START_TIME_KEY)? {
            None => None,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warning(format!("Discarding unreadable timer state '{}'", raw));
                    storage.remove(START_TIME_KEY)?;
                    None
                }
            },
        };

        Ok(Self { storage, start })
    }

    pub fn is_running(&self) -> bool {
        self.start.is_some()
    }

    pub fn started_at(&self) -> Option<i64> {
        self.start
    }

    /// Idle → Running. The instant is made durable before the state flips.
    pub fn start(&mut self, now_ms: i64) -> AppResult<i64> {
        if let Some(existing) = self.start {
            return Err(AppError::SessionAlreadyRunning(describe_instant(existing)));
        }

        self.storage.set(START_TIME_KEY, &now_ms.to_string())?;
        self.start = Some(now_ms);
        Ok(now_ms)
    }

    /// Elapsed time as HH:MM:SS; "00:00:00" while idle.
    pub fn elapsed(&self, now_ms: i64) -> String {
        match self.start {
            Some(start) => format_elapsed(now_ms.saturating_sub(start)),
            None => format_elapsed(0),
        }
    }

    /// The (start, end) pair a stop would record. Does not change state:
    /// the caller clears the session only once the record is persisted.
    pub fn interval(&self, now_ms: i64) -> AppResult<(i64, i64)> {
        let start = self.start.ok_or(AppError::NoActiveSession)?;
        Ok((start, now_ms))
    }

    /// Running → Idle, dropping the durable copy.
    pub fn clear(&mut self) -> AppResult<()> {
        self.storage.remove(START_TIME_KEY)?;
        self.start = None;
        Ok(())
    }
}

/// HH:MM:SS of a millisecond span. Hours are not wrapped at 24.
pub fn format_elapsed(diff_ms: i64) -> String {
    let diff = diff_ms.max(0);
    let hours = diff / MS_PER_HOUR;
    let minutes = (diff % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (diff % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn describe_instant(ms: i64) -> String {
    from_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Redraw the elapsed time on one line every second.
///
/// Runs until interrupted, or for `ticks` redraws when given. `sleep` is
/// injected so the cadence can be exercised without waiting.
pub fn run_live<W, S>(
    session: &SessionClock<'_>,
    clock: &dyn Clock,
    out: &mut W,
    ticks: Option<u64>,
    mut sleep: S,
) -> AppResult<()>
where
    W: Write,
    S: FnMut(Duration),
{
    let mut drawn = 0u64;
    loop {
        write!(out, "\r⏱️  {}", session.elapsed(clock.now_millis()))?;
        out.flush()?;
        drawn += 1;

        if ticks.is_some_and(|max| drawn >= max) {
            writeln!(out)?;
            return Ok(());
        }

        sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::storage::MemoryStorage;

    #[test]
    fn elapsed_is_zero_padded_and_floored() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(999), "00:00:00");
        assert_eq!(format_elapsed(61_500), "00:01:01");
        assert_eq!(format_elapsed(8 * MS_PER_HOUR + 30 * MS_PER_MINUTE), "08:30:00");
        assert_eq!(format_elapsed(100 * MS_PER_HOUR + 59_999), "100:00:59");
        assert_eq!(format_elapsed(-5_000), "00:00:00");
    }

    #[test]
    fn start_is_durable_and_restorable() {
        let storage = MemoryStorage::new();
        let mut clock = SessionClock::restore(&storage).unwrap();
        assert!(!clock.is_running());

        clock.start(1_000).unwrap();
        assert_eq!(storage.get(START_TIME_KEY).unwrap().as_deref(), Some("1000"));

        let restored = SessionClock::restore(&storage).unwrap();
        assert_eq!(restored.started_at(), Some(1_000));
        assert_eq!(restored.elapsed(3_661_000), "01:01:00");
    }

    #[test]
    fn starting_twice_keeps_the_first_instant() {
        let storage = MemoryStorage::new();
        let mut clock = SessionClock::restore(&storage).unwrap();
        clock.start(1_000).unwrap();

        let err = clock.start(2_000).unwrap_err();
        assert!(matches!(err, AppError::SessionAlreadyRunning(_)));
        assert_eq!(clock.started_at(), Some(1_000));
    }

    #[test]
    fn interval_without_start_is_a_validation_error() {
        let storage = MemoryStorage::new();
        let clock = SessionClock::restore(&storage).unwrap();
        let err = clock.interval(5_000).unwrap_err();
        assert!(matches!(err, AppError::NoActiveSession));
        assert!(err.is_validation());
    }

    #[test]
    fn interval_does_not_clear_but_clear_does() {
        let storage = MemoryStorage::new();
        let mut clock = SessionClock::restore(&storage).unwrap();
        clock.start(10).unwrap();

        assert_eq!(clock.interval(20).unwrap(), (10, 20));
        assert!(clock.is_running());

        clock.clear().unwrap();
        assert!(!clock.is_running());
        assert_eq!(storage.get(START_TIME_KEY).unwrap(), None);
    }

    #[test]
    fn extreme_stored_start_does_not_overflow() {
        let storage = MemoryStorage::new();
        storage.set(START_TIME_KEY, &i64::MIN.to_string()).unwrap();
        let clock = SessionClock::restore(&storage).unwrap();
        // saturates at i64::MAX milliseconds
        assert_eq!(clock.elapsed(1_700_000_000_000), "2562047788015:12:55");

        storage.set(START_TIME_KEY, &i64::MAX.to_string()).unwrap();
        let clock = SessionClock::restore(&storage).unwrap();
        assert_eq!(clock.elapsed(i64::MIN), "00:00:00");
    }

    #[test]
    fn garbage_state_restores_as_idle() {
        let storage = MemoryStorage::new();
        storage.set(START_TIME_KEY, "not-a-number").unwrap();
        let clock = SessionClock::restore(&storage).unwrap();
        assert!(!clock.is_running());
        assert_eq!(storage.get(START_TIME_KEY).unwrap(), None);
    }

    #[test]
    fn live_display_ticks_once_per_second() {
        let storage = MemoryStorage::new();
        let clock = FixedClock::at(2025, 9, 1, 9, 0, 0);
        let mut session = SessionClock::restore(&storage).unwrap();
        session.start(clock.now_millis()).unwrap();

        let mut out = Vec::new();
        let mut slept = Vec::new();
        run_live(&session, &clock, &mut out, Some(3), |d| {
            slept.push(d);
            clock.advance(chrono::Duration::from_std(d).unwrap());
        })
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("00:00:00"));
        assert!(text.contains("00:00:01"));
        assert!(text.contains("00:00:02"));
        assert_eq!(slept, vec![Duration::from_secs(1); 2]);
    }
}
