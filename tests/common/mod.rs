#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lint-check-run binary with the
/// Actions environment cleared.
#[macro_export]
macro_rules! lint_check_run {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lint-check-run"));
        for var in common::ACTION_ENV {
            cmd.env_remove(var);
        }
        cmd
    }};
}

/// Environment variables the binary reads inputs from.
pub const ACTION_ENV: [&str; 7] = [
    "INPUT_PATTERN",
    "INPUT_CONFIG_FILE",
    "INPUT_TOKEN",
    "GITHUB_REPOSITORY",
    "GITHUB_SHA",
    "GITHUB_API_URL",
    "RUST_LOG",
];

/// API endpoint nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

pub const NO_ANY_CONFIG: &str = r#"
[rules.no-any]
pattern = ':\s*any\b'
severity = "error"
message = "Unexpected any"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
