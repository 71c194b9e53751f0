//! Shared test infrastructure for integration tests.
//!
//! The stand-in multi-call tool is `sh` itself: `sh <applet> --help` runs the
//! script named after the applet in the fixture root, which prints the canned
//! help text. Nothing has to be made executable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const DATE: &str = "Oct 2026";

/// Scratch tree holding help scripts, fragments and generated pages.
pub struct TestFixture {
    root: TempDir,
}

/// Exit status and captured output of one `mkman` run.
#[derive(Debug)]
pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        let root = TempDir::new().expect("create fixture root");
        fs::create_dir_all(root.path().join("include")).expect("create include dir");
        Self { root }
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root().join("out")
    }

    /// Register `text` as the `--help` output of `applet`.
    pub fn help(&self, applet: &str, text: &str) {
        let newline = if text.ends_with('\n') { "" } else { "\n" };
        let script = format!("cat <<'MKMAN_HELP'\n{text}{newline}MKMAN_HELP\n");
        fs::write(self.root().join(applet), script).expect("write help script");
    }

    pub fn fragment(&self, name: &str, text: &str) {
        fs::write(self.root().join("include").join(name), text).expect("write fragment");
    }

    /// Write `applets.sh`, the discovery command, printing `applets` one per line.
    pub fn applets_script(&self, applets: &[&str]) {
        let mut script = String::new();
        for applet in applets {
            script.push_str(&format!("echo {applet}\n"));
        }
        fs::write(self.root().join("applets.sh"), script).expect("write applets.sh");
    }

    pub fn page(&self, applet: &str) -> Option<String> {
        fs::read_to_string(self.out_dir().join(format!("{applet}.1"))).ok()
    }

    /// Names of the generated pages, sorted.
    pub fn pages(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.out_dir()) else {
            return Vec::new();
        };
        let mut names = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Run `mkman` in the fixture root with fixture defaults plus `args`.
    pub fn run(&self, args: &[&str]) -> RunResult {
        let output = Command::new(env!("CARGO_BIN_EXE_mkman"))
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .args([
                "--tool",
                "sh",
                "--applets-cmd",
                "sh applets.sh",
                "--include-dir",
                "include",
                "--out-dir",
                "out",
                "--date",
                DATE,
            ])
            .args(args)
            .output()
            .expect("run mkman");
        output.into()
    }
}
