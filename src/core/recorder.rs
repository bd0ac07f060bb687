use crate::core::clock::{Clock, SystemClock, from_millis};
use crate::core::session::SessionClock;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, WeeklySettings, WorkRecord};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::time::{parse_time, truncate_to_minute};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Outcome of a successful write: the stored record plus the user's records
/// re-read from the store. `records` is `None` when the re-read failed; the
/// write itself still stands.
#[derive(Debug)]
pub struct Recorded {
    pub record: WorkRecord,
    pub records: Option<Vec<WorkRecord>>,
}

/// Outcome of stopping the timer. The record is stored; `clear_error` is set
/// when the running session could not be cleared afterwards.
#[derive(Debug)]
pub struct Stopped {
    pub recorded: Recorded,
    pub clear_error: Option<AppError>,
}

/// Turns sessions, manual ranges and day marks into persisted records.
pub struct EntryRecorder<'a> {
    store: &'a dyn RecordStore,
    user_id: i64,
    settings: Option<&'a WeeklySettings>,
    clock: &'a dyn Clock,
}

impl<'a> EntryRecorder<'a> {
    /// `settings` may be absent (load failed); every goal is then 0.
    pub fn new(
        store: &'a dyn RecordStore,
        user_id: i64,
        settings: Option<&'a WeeklySettings>,
    ) -> Self {
        Self {
            store,
            user_id,
            settings,
            clock: &SystemClock,
        }
    }

    /// Clock used to stamp `created_at`.
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Target hours for the weekday of `date`.
    pub fn goal_for(&self, date: NaiveDate) -> f64 {
        self.settings
            .map(|s| s.goal_for(date.weekday()))
            .unwrap_or(0.0)
    }

    /// Persist a finished timer session.
    pub fn record_session(&self, start_ms: i64, end_ms: i64) -> AppResult<Recorded> {
        let start = from_millis(start_ms)
            .ok_or_else(|| AppError::Other(format!("Invalid start instant: {}", start_ms)))?;
        let end = from_millis(end_ms)
            .ok_or_else(|| AppError::Other(format!("Invalid end instant: {}", end_ms)))?;

        if end_ms < start_ms {
            return Err(AppError::EndBeforeStart {
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }

        let date = end.date_naive();
        let record = WorkRecord::new(
            self.user_id,
            date,
            self.goal_for(date),
            hours_between_millis(start_ms, end_ms),
            truncate_to_minute(start.time()),
            truncate_to_minute(end.time()),
            Category::Regular,
            self.clock.now(),
        );

        self.persist(record, "Error saving work day")
    }

    /// Record the running session and return to idle. A failed insert leaves
    /// the session running with its durable start untouched.
    pub fn stop(&self, session: &mut SessionClock<'_>, now_ms: i64) -> AppResult<Stopped> {
        let (start_ms, end_ms) = session.interval(now_ms)?;
        let recorded = self.record_session(start_ms, end_ms)?;

        Ok(Stopped {
            recorded,
            clear_error: session.clear().err(),
        })
    }

    /// Persist a manually entered HH:MM range for `date`.
    pub fn record_manual(
        &self,
        date: NaiveDate,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<Recorded> {
        let (start_s, end_s) = match (start, end) {
            (Some(s), Some(e)) if !s.trim().is_empty() && !e.trim().is_empty() => (s, e),
            _ => return Err(AppError::MissingManualTimes),
        };

        let start_t = parse_time(start_s).ok_or_else(|| AppError::InvalidTime(start_s.into()))?;
        let end_t = parse_time(end_s).ok_or_else(|| AppError::InvalidTime(end_s.into()))?;

        let actual = hours_between_times(start_t, end_t)?;

        let record = WorkRecord::new(
            self.user_id,
            date,
            self.goal_for(date),
            actual,
            start_t,
            end_t,
            Category::Manual,
            self.clock.now(),
        );

        self.persist(record, "Error saving manual entry")
    }

    /// Mark today as a vacation or sick day. Goal and actual are zero; start
    /// and end both carry the current time as placeholders.
    pub fn mark_day(&self, category: Category, now: DateTime<Local>) -> AppResult<Recorded> {
        if !category.is_day_mark() {
            return Err(AppError::Other(format!(
                "Only vacation and sick days can be marked, not '{}'",
                category
            )));
        }

        let at = truncate_to_minute(now.time());
        let action = format!("Error adding {} day", category);
        let record = WorkRecord::new(
            self.user_id,
            now.date_naive(),
            0.0,
            0.0,
            at,
            at,
            category,
            now,
        );

        self.persist(record, &action)
    }

    /// Current records of the user, date ascending.
    pub fn records(&self) -> AppResult<Vec<WorkRecord>> {
        self.store
            .records_for_user(self.user_id)
            .map_err(|e| AppError::remote("Error loading records", e))
    }

    /// Delete every record of the user.
    pub fn reset(&self) -> AppResult<usize> {
        self.store
            .delete_records_for_user(self.user_id)
            .map_err(|e| AppError::remote("Error resetting table", e))
    }

    fn persist(&self, record: WorkRecord, action: &str) -> AppResult<Recorded> {
        let saved = self
            .store
            .insert_record(&record)
            .map_err(|e| AppError::remote(action, e))?;

        let records = match self.records() {
            Ok(r) => Some(r),
            Err(e) => {
                warning(format!("Saved, but reloading the table failed: {}", e));
                None
            }
        };

        Ok(Recorded {
            record: saved,
            records,
        })
    }
}

/// Round to two decimals (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hours between two epoch-millis instants, two-decimal precision.
pub fn hours_between_millis(start_ms: i64, end_ms: i64) -> f64 {
    round2((end_ms - start_ms) as f64 / MS_PER_HOUR)
}

/// Hours between two same-day HH:MM times; rejects end before start.
pub fn hours_between_times(start: NaiveTime, end: NaiveTime) -> AppResult<f64> {
    if end < start {
        return Err(AppError::EndBeforeStart {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        });
    }
    let minutes = (end - start).num_minutes();
    Ok(round2(minutes as f64 / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{Clock, FixedClock};
    use crate::storage::{LocalStorage, MemoryStorage, START_TIME_KEY};
    use crate::store::MemoryStore;

    /// Local storage whose removals fail.
    struct StickyStorage(MemoryStorage);

    impl LocalStorage for StickyStorage {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.0.set(key, value)
        }

        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::Io(std::io::Error::other("read-only state file")))
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn session_on_a_monday_with_default_settings() {
        let store = MemoryStore::new();
        let settings = WeeklySettings::defaults_for(1);
        let recorder = EntryRecorder::new(&store, 1, Some(&settings));

        let start = FixedClock::at(2025, 9, 1, 9, 0, 0).now_millis();
        let end = FixedClock::at(2025, 9, 1, 17, 30, 0).now_millis();

        let out = recorder.record_session(start, end).unwrap();
        let r = &out.record;
        assert_eq!(r.goal, 8.0);
        assert_eq!(r.actual, 8.5);
        assert_eq!(r.hours_str(), "8.50");
        assert_eq!(r.start_str(), "09:00");
        assert_eq!(r.end_str(), "17:30");
        assert_eq!(r.category, Category::Regular);
        assert_eq!(r.date, monday());
        assert_eq!(out.records.unwrap().len(), 1);
    }

    #[test]
    fn session_hours_are_rounded_to_two_decimals() {
        // 1h 20m 30s = 1.341666.. h
        assert_eq!(hours_between_millis(0, 4_830_000), 1.34);
        // 10 minutes = 0.1666.. h
        assert_eq!(hours_between_millis(5, 600_005), 0.17);
        assert_eq!(hours_between_millis(7, 7), 0.0);
    }

    #[test]
    fn goal_is_zero_without_settings_and_on_saturday() {
        let store = MemoryStore::new();
        let bare = EntryRecorder::new(&store, 1, None);
        assert_eq!(bare.goal_for(monday()), 0.0);

        let settings = WeeklySettings::defaults_for(1);
        let with = EntryRecorder::new(&store, 1, Some(&settings));
        let saturday = NaiveDate::from_ymd_opt(2025, 9, 6).unwrap();
        let friday = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        assert_eq!(with.goal_for(saturday), 0.0);
        assert_eq!(with.goal_for(friday), 4.0);
    }

    #[test]
    fn manual_end_before_start_is_rejected_and_nothing_is_stored() {
        let store = MemoryStore::new();
        let recorder = EntryRecorder::new(&store, 1, None);

        let err = recorder
            .record_manual(monday(), Some("09:00"), Some("08:00"))
            .unwrap_err();
        assert!(matches!(err, AppError::EndBeforeStart { .. }));
        assert_eq!(store.record_count(), 0);

        // one minute earlier is enough
        assert!(recorder
            .record_manual(monday(), Some("09:01"), Some("09:00"))
            .is_err());
        assert_eq!(store.record_count(), 0);
    }

    #[test]
    fn manual_requires_both_times() {
        let store = MemoryStore::new();
        let recorder = EntryRecorder::new(&store, 1, None);
        for (s, e) in [(None, Some("10:00")), (Some("09:00"), None), (Some(" "), Some("10:00"))] {
            let err = recorder.record_manual(monday(), s, e).unwrap_err();
            assert!(matches!(err, AppError::MissingManualTimes));
        }
        assert!(matches!(
            recorder.record_manual(monday(), Some("9h"), Some("10:00")),
            Err(AppError::InvalidTime(_))
        ));
    }

    #[test]
    fn manual_entry_is_stored_with_goal_and_category() {
        let store = MemoryStore::new();
        let settings = WeeklySettings::defaults_for(1);
        let recorder = EntryRecorder::new(&store, 1, Some(&settings));

        let out = recorder
            .record_manual(monday(), Some("08:15"), Some("12:35"))
            .unwrap();
        assert_eq!(out.record.actual, 4.33);
        assert_eq!(out.record.goal, 8.0);
        assert_eq!(out.record.category, Category::Manual);

        // same range again: duplicates per day are allowed
        recorder
            .record_manual(monday(), Some("08:15"), Some("12:35"))
            .unwrap();
        assert_eq!(store.record_count(), 2);
    }

    #[test]
    fn marking_vacation_uses_placeholders() {
        let store = MemoryStore::new();
        let settings = WeeklySettings::defaults_for(1);
        let recorder = EntryRecorder::new(&store, 1, Some(&settings));
        let now = FixedClock::at(2025, 9, 1, 10, 42, 17).now();

        let out = recorder.mark_day(Category::Vacation, now).unwrap();
        let r = out.record;
        assert_eq!(r.goal, 0.0);
        assert_eq!(r.actual, 0.0);
        assert_eq!(r.category, Category::Vacation);
        assert_eq!(r.start_str(), "10:42");
        assert_eq!(r.start_time, r.end_time);

        assert!(recorder.mark_day(Category::Manual, now).is_err());
    }

    #[test]
    fn created_at_comes_from_the_injected_clock() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(2025, 9, 2, 18, 5, 0);
        let recorder = EntryRecorder::new(&store, 1, None).with_clock(&clock);

        let out = recorder
            .record_manual(monday(), Some("09:00"), Some("10:00"))
            .unwrap();
        assert_eq!(out.record.created_at, clock.now().to_rfc3339());

        let start = FixedClock::at(2025, 9, 1, 9, 0, 0).now_millis();
        let out = recorder.record_session(start, start + 60_000).unwrap();
        assert_eq!(out.record.created_at, clock.now().to_rfc3339());
    }

    #[test]
    fn stop_records_and_clears_the_session() {
        let store = MemoryStore::new();
        let storage = MemoryStorage::new();
        let recorder = EntryRecorder::new(&store, 1, None);
        let clock = FixedClock::at(2025, 9, 1, 9, 0, 0);

        let mut session = SessionClock::restore(&storage).unwrap();
        session.start(clock.now_millis()).unwrap();
        clock.advance(chrono::Duration::minutes(90));

        let out = recorder.stop(&mut session, clock.now_millis()).unwrap();
        assert_eq!(out.recorded.record.actual, 1.5);
        assert!(out.clear_error.is_none());
        assert!(!session.is_running());
        assert_eq!(storage.get(START_TIME_KEY).unwrap(), None);
    }

    #[test]
    fn failed_insert_on_stop_keeps_the_session_running() {
        let store = MemoryStore::new();
        store.fail_writes("connection refused");
        let storage = MemoryStorage::new();
        let recorder = EntryRecorder::new(&store, 1, None);

        let mut session = SessionClock::restore(&storage).unwrap();
        session.start(1_000).unwrap();

        let err = recorder.stop(&mut session, 61_000).unwrap_err();
        assert_eq!(err.to_string(), "Error saving work day: connection refused");
        assert_eq!(session.started_at(), Some(1_000));
        assert_eq!(storage.get(START_TIME_KEY).unwrap().as_deref(), Some("1000"));
    }

    #[test]
    fn failed_clear_after_stop_still_returns_the_stored_record() {
        let store = MemoryStore::new();
        let storage = StickyStorage(MemoryStorage::new());
        let recorder = EntryRecorder::new(&store, 1, None);

        let mut session = SessionClock::restore(&storage).unwrap();
        session.start(1_000).unwrap();

        let out = recorder.stop(&mut session, 3_601_000).unwrap();
        assert_eq!(out.recorded.record.actual, 1.0);
        assert!(out.clear_error.is_some());
        assert_eq!(store.record_count(), 1);
    }

    #[test]
    fn store_failure_is_reported_verbatim_and_leaves_records_alone() {
        let store = MemoryStore::new();
        let recorder = EntryRecorder::new(&store, 1, None);
        recorder
            .record_manual(monday(), Some("09:00"), Some("10:00"))
            .unwrap();

        store.fail_writes("permission denied for table work_hours");
        let err = recorder
            .record_manual(monday(), Some("11:00"), Some("12:00"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error saving manual entry: permission denied for table work_hours"
        );
        assert_eq!(store.record_count(), 1);
    }

    #[test]
    fn reset_only_clears_the_current_user() {
        let store = MemoryStore::new();
        EntryRecorder::new(&store, 2, None)
            .record_manual(monday(), Some("09:00"), Some("10:00"))
            .unwrap();
        let mine = EntryRecorder::new(&store, 1, None);
        mine.record_manual(monday(), Some("09:00"), Some("10:00"))
            .unwrap();

        assert_eq!(mine.reset().unwrap(), 1);
        assert!(mine.records().unwrap().is_empty());
        assert_eq!(store.record_count(), 1);
    }
}
