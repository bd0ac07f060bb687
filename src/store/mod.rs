//! Storage seam between the core logic and the backing data store.
//!
//! Every core component receives the store it needs explicitly, so the
//! SQLite implementation can be swapped for [`MemoryStore`] in tests.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::{User, WeeklySettings, WorkRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The store refused the call (constraint, unavailable backend, ...).
    #[error("{0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Work records table: insert, select-by-user ordered by date, delete-by-user.
pub trait RecordStore {
    /// Insert a record and return it with its assigned id.
    fn insert_record(&self, record: &WorkRecord) -> StoreResult<WorkRecord>;

    /// All records of a user, date ascending (insertion order within a day).
    fn records_for_user(&self, user_id: i64) -> StoreResult<Vec<WorkRecord>>;

    /// Remove every record of a user, returning how many were deleted.
    fn delete_records_for_user(&self, user_id: i64) -> StoreResult<usize>;
}

/// Weekly settings table: select-by-user, insert, upsert-by-user.
pub trait SettingsStore {
    fn settings_for_user(&self, user_id: i64) -> StoreResult<Option<WeeklySettings>>;

    fn insert_settings(&self, settings: &WeeklySettings) -> StoreResult<()>;

    fn upsert_settings(&self, settings: &WeeklySettings) -> StoreResult<()>;
}

/// Local accounts.
pub trait UserStore {
    fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    fn user_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    fn insert_user(&self, email: &str, password_hash: &str) -> StoreResult<User>;
}
