use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn manual_entry_is_listed_with_goal_and_hours() {
    let env = TestEnv::signed_in();

    // 2025-09-01 is a Monday: default goal 8
    env.wk()
        .args(["manual", "--date", "2025-09-01", "--start", "08:15", "--end", "12:35"])
        .assert()
        .success()
        .stdout(contains("Manual entry saved").and(contains("4.33")));

    env.wk()
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("2025-09-01")
                .and(contains("08:15"))
                .and(contains("12:35"))
                .and(contains("8.00"))
                .and(contains("4.33"))
                .and(contains("manual")),
        );
}

#[test]
fn manual_end_before_start_is_rejected() {
    let env = TestEnv::signed_in();

    env.wk()
        .args(["manual", "--date", "2025-09-01", "--start", "09:00", "--end", "08:00"])
        .assert()
        .failure()
        .stderr(contains("End time must be after start time"));

    env.wk()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No data to display"));
}

#[test]
fn manual_requires_both_times() {
    let env = TestEnv::signed_in();

    env.wk()
        .args(["manual", "--start", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Please enter both a start and an end time"));

    env.wk()
        .args(["manual", "--start", "9am", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    env.wk()
        .args(["manual", "--date", "01/09/2025", "--start", "09:00", "--end", "10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn marking_a_vacation_day() {
    let env = TestEnv::signed_in();

    env.wk()
        .args(["mark", "vacation"])
        .assert()
        .success()
        .stdout(contains("vacation day"));

    env.wk()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("vacation").and(contains("0.00")));

    env.wk()
        .args(["mark", "holiday-ish"])
        .assert()
        .failure()
        .stderr(contains("Unknown day type"));
}

#[test]
fn duplicates_on_the_same_day_are_kept() {
    let env = TestEnv::signed_in();
    env.manual("2025-09-01", "09:00", "10:00");
    env.manual("2025-09-01", "09:00", "10:00");

    // running total over both rows
    env.wk()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2.00"));
}

#[test]
fn chart_shows_both_series() {
    let env = TestEnv::signed_in();

    env.wk().arg("chart").assert().success().stdout(contains("No data to display"));

    env.manual("2025-09-01", "09:00", "17:00");
    env.wk()
        .args(["chart", "--width", "10"])
        .assert()
        .success()
        .stdout(
            contains("2025-09-01")
                .and(contains("actual"))
                .and(contains("goal"))
                .and(contains("██████████")),
        );
}
