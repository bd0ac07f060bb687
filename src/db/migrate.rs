use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied at most once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251019_0001_create_users",
        description: "Created users table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20251019_0002_create_work_hours",
        description: "Created work_hours table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_hours (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL,
            date        TEXT NOT NULL,
            goal        REAL NOT NULL DEFAULT 0,
            actual      REAL NOT NULL DEFAULT 0,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            category    TEXT NOT NULL DEFAULT 'regular',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_hours_user_date ON work_hours(user_id, date);
        "#,
    },
    Migration {
        version: "20251019_0003_create_work_settings",
        description: "Created work_settings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_settings (
            user_id  INTEGER PRIMARY KEY,
            sun      REAL NOT NULL DEFAULT 8,
            mon      REAL NOT NULL DEFAULT 8,
            tue      REAL NOT NULL DEFAULT 8,
            wed      REAL NOT NULL DEFAULT 8,
            thu      REAL NOT NULL DEFAULT 8,
            fri      REAL NOT NULL DEFAULT 4,
            sat      REAL NOT NULL DEFAULT 0
        );
        "#,
    },
];

/// Ensure that the `log` table exists. It also stores the applied-migration
/// markers, so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions not yet recorded as applied, in application order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Called once at startup through `db::initialize::init_db()`.
/// Running it again is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
    }

    Ok(())
}
