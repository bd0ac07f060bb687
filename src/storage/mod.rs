//! Durable device-local key/value storage.
//!
//! Holds the running timer's start instant and the signed-in user, the two
//! pieces of state that must survive between invocations but never leave the
//! machine.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::AppResult;

/// Key holding the active session's start instant (epoch millis as text).
pub const START_TIME_KEY: &str = "start_time";

/// Key holding the signed-in user's id.
pub const AUTH_USER_KEY: &str = "auth_user";

pub trait LocalStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}
