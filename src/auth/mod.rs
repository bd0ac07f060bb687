//! Local password accounts and the signed-in session.
//!
//! Accounts live in the `users` table with argon2 hashes; the signed-in user
//! id is kept in local storage next to the timer state.

use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::storage::{AUTH_USER_KEY, LocalStorage};
use crate::store::UserStore;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct Auth<'a> {
    users: &'a dyn UserStore,
    storage: &'a dyn LocalStorage,
}

impl<'a> Auth<'a> {
    pub fn new(users: &'a dyn UserStore, storage: &'a dyn LocalStorage) -> Self {
        Self { users, storage }
    }

    /// Create an account. Does not sign in.
    pub fn sign_up(&self, email: &str, password: &str, confirm: &str) -> AppResult<User> {
        if password != confirm {
            return Err(AppError::PasswordMismatch);
        }

        let email = normalize_email(email)?;

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Auth(format!(
                "Password should be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let existing = self
            .users
            .user_by_email(&email)
            .map_err(|e| AppError::remote("Error signing up", e))?;
        if existing.is_some() {
            return Err(AppError::UserExists(email));
        }

        let hash = hash_password(password)?;
        self.users
            .insert_user(&email, &hash)
            .map_err(|e| AppError::remote("Error signing up", e))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> AppResult<User> {
        let email = normalize_email(email)?;

        let user = self
            .users
            .user_by_email(&email)
            .map_err(|e| AppError::remote("Error signing in", e))?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        self.storage.set(AUTH_USER_KEY, &user.id.to_string())?;
        Ok(user)
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.storage.remove(AUTH_USER_KEY)
    }

    /// The signed-in user, if any. A stale id (user no longer in the
    /// database) signs out silently.
    pub fn current_user(&self) -> AppResult<Option<User>> {
        let Some(raw) = self.storage.get(AUTH_USER_KEY)? else {
            return Ok(None);
        };

        let user = match raw.trim().parse::<i64>() {
            Ok(id) => self
                .users
                .user_by_id(id)
                .map_err(|e| AppError::remote("Error loading session", e))?,
            Err(_) => None,
        };

        if user.is_none() {
            self.storage.remove(AUTH_USER_KEY)?;
        }
        Ok(user)
    }

    /// Boundary check for every data command.
    pub fn require_user(&self) -> AppResult<User> {
        self.current_user()?.ok_or(AppError::NotSignedIn)
    }
}

fn normalize_email(email: &str) -> AppResult<String> {
    let e = email.trim().to_lowercase();
    let valid = match e.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(AppError::InvalidEmail(email.to_string()));
    }
    Ok(e)
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Auth(format!("could not hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::MemoryStore;

    #[test]
    fn sign_up_then_sign_in_round_trip() {
        let users = MemoryStore::new();
        let storage = MemoryStorage::new();
        let auth = Auth::new(&users, &storage);

        let created = auth.sign_up(" Dana@Example.com ", "secret1", "secret1").unwrap();
        assert_eq!(created.email, "dana@example.com");
        assert_ne!(created.password_hash, "secret1");
        assert!(auth.current_user().unwrap().is_none());

        let signed = auth.sign_in("dana@example.com", "secret1").unwrap();
        assert_eq!(signed.id, created.id);
        assert_eq!(auth.require_user().unwrap().id, created.id);

        auth.sign_out().unwrap();
        assert!(matches!(auth.require_user(), Err(AppError::NotSignedIn)));
    }

    #[test]
    fn mismatched_passwords_are_a_validation_error() {
        let users = MemoryStore::new();
        let storage = MemoryStorage::new();
        let err = Auth::new(&users, &storage)
            .sign_up("a@b.c", "secret1", "secret2")
            .unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch));
        assert!(users.user_by_email("a@b.c").unwrap().is_none());
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let users = MemoryStore::new();
        let storage = MemoryStorage::new();
        let auth = Auth::new(&users, &storage);
        auth.sign_up("a@b.c", "secret1", "secret1").unwrap();

        assert!(matches!(auth.sign_in("a@b.c", "nope12"), Err(AppError::InvalidCredentials)));
        assert!(matches!(auth.sign_in("x@b.c", "secret1"), Err(AppError::InvalidCredentials)));
        assert!(storage.get(AUTH_USER_KEY).unwrap().is_none());
    }

    #[test]
    fn duplicate_and_malformed_sign_ups_fail() {
        let users = MemoryStore::new();
        let storage = MemoryStorage::new();
        let auth = Auth::new(&users, &storage);
        auth.sign_up("a@b.c", "secret1", "secret1").unwrap();

        assert!(matches!(auth.sign_up("A@B.C", "secret1", "secret1"), Err(AppError::UserExists(_))));
        assert!(matches!(auth.sign_up("nobody", "secret1", "secret1"), Err(AppError::InvalidEmail(_))));
        assert!(matches!(auth.sign_up("b@b.c", "abc", "abc"), Err(AppError::Auth(_))));
    }

    #[test]
    fn stale_session_signs_out() {
        let users = MemoryStore::new();
        let storage = MemoryStorage::new();
        storage.set(AUTH_USER_KEY, "42").unwrap();

        let auth = Auth::new(&users, &storage);
        assert!(auth.current_user().unwrap().is_none());
        assert!(storage.get(AUTH_USER_KEY).unwrap().is_none());
    }
}
