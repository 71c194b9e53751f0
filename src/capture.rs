//! Capture applet help text from the multi-call tool.
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Something that can produce the `--help` output of an applet.
pub trait HelpSource: Sync {
    fn help_text(&self, applet: &str) -> Result<String>;
}

struct HelpCapture {
    stdout: String,
    stderr: String,
    status: ExitStatus,
}

/// Runs `<tool> <applet> --help` with colour output disabled.
pub struct ToolHelpSource {
    tool: PathBuf,
}

impl ToolHelpSource {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }

    fn capture(&self, applet: &str) -> Result<HelpCapture> {
        let output = Command::new(&self.tool)
            .arg(applet)
            .arg("--help")
            .env("NOCOLOR", "1")
            .output()
            .with_context(|| format!("run {} {applet} --help", self.tool.display()))?;

        Ok(HelpCapture {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        })
    }
}

impl HelpSource for ToolHelpSource {
    fn help_text(&self, applet: &str) -> Result<String> {
        let capture = self.capture(applet)?;
        if !capture.status.success() {
            let stderr_line = capture.stderr.lines().next().unwrap_or_default().trim();
            return Err(anyhow!(
                "{} {applet} --help failed: {}{}",
                self.tool.display(),
                capture.status,
                if stderr_line.is_empty() {
                    String::new()
                } else {
                    format!(": {stderr_line}")
                }
            ));
        }
        if !capture.stderr.trim().is_empty() {
            tracing::warn!(applet, stderr = capture.stderr.trim(), "help capture wrote to stderr");
        }
        Ok(capture.stdout)
    }
}
