//! SQLite implementation of the store traits.

use super::{RecordStore, SettingsStore, StoreResult, UserStore};
use crate::errors::AppError;
use crate::models::{Category, User, WeeklySettings, WorkRecord};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Store backed by an open SQLite connection whose schema has already been
/// migrated (see `db::migrate`).
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

/// Mapping DB → WorkRecord.
pub fn map_record(row: &Row) -> rusqlite::Result<WorkRecord> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M")
        .map_err(|_| conversion_error(5, AppError::InvalidTime(start_str.clone())))?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M")
        .map_err(|_| conversion_error(6, AppError::InvalidTime(end_str.clone())))?;

    let category: String = row.get("category")?;

    Ok(WorkRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        goal: row.get("goal")?,
        actual: row.get("actual")?,
        start_time,
        end_time,
        category: Category::from_db_str(&category),
        created_at: row.get("created_at")?,
    })
}

fn map_settings(row: &Row) -> rusqlite::Result<WeeklySettings> {
    Ok(WeeklySettings {
        user_id: row.get("user_id")?,
        sun: row.get("sun")?,
        mon: row.get("mon")?,
        tue: row.get("tue")?,
        wed: row.get("wed")?,
        thu: row.get("thu")?,
        fri: row.get("fri")?,
        sat: row.get("sat")?,
    })
}

fn map_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        created_at: row.get("created_at")?,
    })
}

impl RecordStore for SqliteStore<'_> {
    fn insert_record(&self, record: &WorkRecord) -> StoreResult<WorkRecord> {
        self.conn.execute(
            "INSERT INTO work_hours (user_id, date, goal, actual, start_time, end_time, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.user_id,
                record.date_str(),
                record.goal,
                record.actual,
                record.start_str(),
                record.end_str(),
                record.category.to_db_str(),
                record.created_at,
            ],
        )?;

        let mut saved = record.clone();
        saved.id = self.conn.last_insert_rowid();
        Ok(saved)
    }

    fn records_for_user(&self, user_id: i64) -> StoreResult<Vec<WorkRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, user_id, date, goal, actual, start_time, end_time, category, created_at
             FROM work_hours
             WHERE user_id = ?1
             ORDER BY date ASC, id ASC",
        )?;

        let rows = stmt.query_map([user_id], map_record)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn delete_records_for_user(&self, user_id: i64) -> StoreResult<usize> {
        let n = self
            .conn
            .execute("DELETE FROM work_hours WHERE user_id = ?1", [user_id])?;
        Ok(n)
    }
}

impl SettingsStore for SqliteStore<'_> {
    fn settings_for_user(&self, user_id: i64) -> StoreResult<Option<WeeklySettings>> {
        let settings = self
            .conn
            .query_row(
                "SELECT user_id, sun, mon, tue, wed, thu, fri, sat
                 FROM work_settings
                 WHERE user_id = ?1",
                [user_id],
                map_settings,
            )
            .optional()?;
        Ok(settings)
    }

    fn insert_settings(&self, s: &WeeklySettings) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO work_settings (user_id, sun, mon, tue, wed, thu, fri, sat)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![s.user_id, s.sun, s.mon, s.tue, s.wed, s.thu, s.fri, s.sat],
        )?;
        Ok(())
    }

    fn upsert_settings(&self, s: &WeeklySettings) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO work_settings (user_id, sun, mon, tue, wed, thu, fri, sat)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(user_id) DO UPDATE SET
                sun = excluded.sun, mon = excluded.mon, tue = excluded.tue,
                wed = excluded.wed, thu = excluded.thu, fri = excluded.fri,
                sat = excluded.sat",
            params![s.user_id, s.sun, s.mon, s.tue, s.wed, s.thu, s.fri, s.sat],
        )?;
        Ok(())
    }
}

impl UserStore for SqliteStore<'_> {
    fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, email, password_hash, created_at FROM users WHERE email = ?1",
                [email],
                map_user,
            )
            .optional()?;
        Ok(user)
    }

    fn user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, email, password_hash, created_at FROM users WHERE id = ?1",
                [id],
                map_user,
            )
            .optional()?;
        Ok(user)
    }

    fn insert_user(&self, email: &str, password_hash: &str) -> StoreResult<User> {
        let created_at = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![email, password_hash, created_at],
        )?;

        Ok(User {
            id: self.conn.last_insert_rowid(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }
}
