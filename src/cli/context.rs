//! Per-invocation resources shared by the command handlers.

use crate::auth::Auth;
use crate::config::Config;
use crate::core::settings::SettingsAccessor;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{User, WeeklySettings};
use crate::storage::FileStorage;
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

pub struct Context {
    pub pool: DbPool,
    pub storage: FileStorage,
}

impl Context {
    /// Open the database (running pending migrations) and the state file.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        if let Some(parent) = Path::new(&cfg.database).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        Ok(Self {
            pool,
            storage: FileStorage::new(&cfg.state_file),
        })
    }

    pub fn store(&self) -> SqliteStore<'_> {
        self.pool.store()
    }

    pub fn auth<'a>(&'a self, store: &'a SqliteStore<'a>) -> Auth<'a> {
        Auth::new(store, &self.storage)
    }

    /// The signed-in user, or `NotSignedIn`.
    pub fn require_user(&self) -> AppResult<User> {
        let store = self.store();
        self.auth(&store).require_user()
    }

    /// Weekly targets for goal lookups. A failed load is reported and the
    /// caller continues with every goal at 0.
    pub fn settings_or_warn(&self, store: &SqliteStore<'_>, user_id: i64) -> Option<WeeklySettings> {
        match SettingsAccessor::new(store).load(user_id) {
            Ok(s) => Some(s),
            Err(e) => {
                warning(format!("{} (goals will be recorded as 0)", e));
                None
            }
        }
    }

    pub fn log(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
