use chrono::NaiveDate;
use rusqlite::Connection;
use workhours::core::recorder::EntryRecorder;
use workhours::core::report::Report;
use workhours::core::settings::SettingsAccessor;
use workhours::db::initialize::init_db;
use workhours::db::migrate::pending_migrations;
use workhours::models::Category;
use workhours::store::{SqliteStore, UserStore};

fn open_file_db() -> (tempfile::TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let conn = Connection::open(dir.path().join("lib.sqlite")).unwrap();
    init_db(&conn).unwrap();
    (dir, conn)
}

#[test]
fn migrations_run_once() {
    let (_dir, conn) = open_file_db();
    assert!(pending_migrations(&conn).unwrap().is_empty());
    init_db(&conn).unwrap();

    let applied: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(applied as usize, 3);
}

#[test]
fn records_round_trip_through_sqlite_in_date_order() {
    let (_dir, conn) = open_file_db();
    let store = SqliteStore::new(&conn);
    let user = store.insert_user("a@b.c", "hash").unwrap();

    let settings = SettingsAccessor::new(&store).load(user.id).unwrap();
    let recorder = EntryRecorder::new(&store, user.id, Some(&settings));

    let later = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
    let earlier = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    recorder.record_manual(later, Some("08:00"), Some("12:00")).unwrap();
    let out = recorder
        .record_manual(earlier, Some("09:00"), Some("17:30"))
        .unwrap();

    let records = out.records.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, earlier);
    assert_eq!(records[0].actual, 8.5);
    assert_eq!(records[0].goal, 8.0);
    assert_eq!(records[1].goal, 4.0);
    assert_eq!(records[1].category, Category::Manual);

    let report = Report::build(&records);
    assert_eq!(report.rows[1].cumulative, 12.5);
    assert_eq!(report.total_goal, 12.0);
}

#[test]
fn settings_are_seeded_once_and_upserted() {
    let (_dir, conn) = open_file_db();
    let store = SqliteStore::new(&conn);
    let user = store.insert_user("a@b.c", "hash").unwrap();
    let accessor = SettingsAccessor::new(&store);

    let mut s = accessor.load(user.id).unwrap();
    accessor.load(user.id).unwrap();
    s.fri = 6.0;
    accessor.save(&s).unwrap();

    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM work_settings WHERE user_id = ?1",
            [user.id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(accessor.load(user.id).unwrap().fri, 6.0);
}
