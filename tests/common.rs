#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EMAIL: &str = "dana@example.com";
pub const PASSWORD: &str = "secret123";

/// Isolated app directory, database and state file for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("workhours.sqlite")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The binary with `--db`/`--state` pointing into the temp dir.
    pub fn wk(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("workhours");
        cmd.env("WORKHOURS_HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .arg("--db")
            .arg(self.db_path())
            .arg("--state")
            .arg(self.state_path());
        cmd
    }

    pub fn init(&self) {
        self.wk().args(["--test", "init"]).assert().success();
    }

    /// init + signup + login
    pub fn signed_in() -> Self {
        let env = Self::new();
        env.init();
        env.wk()
            .args(["signup", "--email", EMAIL, "--password", PASSWORD, "--confirm", PASSWORD])
            .assert()
            .success();
        env.wk()
            .args(["login", "--email", EMAIL, "--password", PASSWORD])
            .assert()
            .success();
        env
    }

    pub fn manual(&self, date: &str, start: &str, end: &str) {
        self.wk()
            .args(["manual", "--date", date, "--start", start, "--end", end])
            .assert()
            .success();
    }
}
