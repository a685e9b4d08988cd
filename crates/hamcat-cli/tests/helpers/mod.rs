use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The reference date every test pins unless it says otherwise.
pub const TODAY: &str = "2025-08-20";

/// Test harness running the CLI inside an empty temporary working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with its own working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance isolated from the caller's config and environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hamcat").expect("Failed to find hamcat binary");
        cmd.current_dir(self.temp_dir.path());
        for key in ["HAMCAT_EVENTS_FILE", "HAMCAT_PAST_LIMIT", "HAMCAT_TODAY", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        cmd
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file into the working directory and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Helper to run a command pinned to [`TODAY`] and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command()
            .args(["--today", TODAY])
            .args(args)
            .assert()
            .success()
    }

    /// Helper to run a command pinned to [`TODAY`] and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command()
            .args(["--today", TODAY])
            .args(args)
            .assert()
            .failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// A listing with one entry whose date cannot be read
    pub fn listing_with_unreadable_date() -> &'static str {
        r#"{
            "events": [
                {"date": "22 Août 25", "event": "Warmup Night", "genre": "Psytrance"},
                {"date": "TBA", "event": "Secret Set", "genre": "???"},
                {"date": "01 Août 25", "event": "Summer Opener", "genre": "Goa"}
            ]
        }"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the upcoming table headers
    pub fn has_upcoming_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Date")
            .and(predicate::str::contains("Event"))
            .and(predicate::str::contains("Urgency"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }

    /// Predicate checking that `first` is printed before `second`
    pub fn in_order(first: &'static str, second: &'static str) -> impl Predicate<str> {
        predicate::function(move |out: &str| match (out.find(first), out.find(second)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        })
    }
}
