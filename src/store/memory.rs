//! In-process store used by tests and dry runs.

use super::{RecordStore, SettingsStore, StoreError, StoreResult, UserStore};
use crate::models::{User, WeeklySettings, WorkRecord};
use chrono::Local;
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<Vec<WorkRecord>>,
    settings: RefCell<Vec<WeeklySettings>>,
    users: RefCell<Vec<User>>,
    next_id: Cell<i64>,
    settings_inserts: Cell<usize>,
    failure: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with `message` until [`MemoryStore::recover`].
    pub fn fail_writes(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    /// How many times a settings row was inserted (upserts excluded).
    pub fn settings_inserts(&self) -> usize {
        self.settings_inserts.get()
    }

    pub fn record_count(&self) -> usize {
        self.records.borrow().len()
    }

    fn check_writable(&self) -> StoreResult<()> {
        match self.failure.borrow().as_ref() {
            Some(msg) => Err(StoreError::Rejected(msg.clone())),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl RecordStore for MemoryStore {
    fn insert_record(&self, record: &WorkRecord) -> StoreResult<WorkRecord> {
        self.check_writable()?;
        let mut saved = record.clone();
        saved.id = self.next_id();
        self.records.borrow_mut().push(saved.clone());
        Ok(saved)
    }

    fn records_for_user(&self, user_id: i64) -> StoreResult<Vec<WorkRecord>> {
        let mut out: Vec<WorkRecord> = self
            .records
            .borrow()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    fn delete_records_for_user(&self, user_id: i64) -> StoreResult<usize> {
        self.check_writable()?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.user_id != user_id);
        Ok(before - records.len())
    }
}

impl SettingsStore for MemoryStore {
    fn settings_for_user(&self, user_id: i64) -> StoreResult<Option<WeeklySettings>> {
        Ok(self
            .settings
            .borrow()
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    fn insert_settings(&self, settings: &WeeklySettings) -> StoreResult<()> {
        self.check_writable()?;
        let mut rows = self.settings.borrow_mut();
        if rows.iter().any(|s| s.user_id == settings.user_id) {
            return Err(StoreError::Rejected(format!(
                "duplicate key value violates unique constraint (user_id={})",
                settings.user_id
            )));
        }
        rows.push(settings.clone());
        self.settings_inserts.set(self.settings_inserts.get() + 1);
        Ok(())
    }

    fn upsert_settings(&self, settings: &WeeklySettings) -> StoreResult<()> {
        self.check_writable()?;
        let mut rows = self.settings.borrow_mut();
        match rows.iter_mut().find(|s| s.user_id == settings.user_id) {
            Some(existing) => *existing = settings.clone(),
            None => rows.push(settings.clone()),
        }
        Ok(())
    }
}

impl UserStore for MemoryStore {
    fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    fn user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| u.id == id).cloned())
    }

    fn insert_user(&self, email: &str, password_hash: &str) -> StoreResult<User> {
        self.check_writable()?;
        if self.user_by_email(email)?.is_some() {
            return Err(StoreError::Rejected(format!("User already registered: {email}")));
        }
        let user = User {
            id: self.next_id(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Local::now().to_rfc3339(),
        };
        self.users.borrow_mut().push(user.clone());
        Ok(user)
    }
}
