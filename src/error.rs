//! Typed failures surfaced by the generator.
//!
//! Only the two conditions callers branch on get variants; process and file
//! failures travel as `anyhow` errors with context.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManError {
    /// The applet list could not be discovered; fatal for the whole run.
    #[error("applet discovery via `{command}` failed: {reason}")]
    Discovery { command: String, reason: String },

    /// Help text does not follow the format the generator relies on.
    #[error("help text for {applet} is malformed ({reason}): {line:?}")]
    MalformedHelp {
        applet: String,
        line: String,
        reason: &'static str,
    },
}

impl ManError {
    pub(crate) fn malformed(applet: &str, line: &str, reason: &'static str) -> Self {
        ManError::MalformedHelp {
            applet: applet.to_string(),
            line: line.to_string(),
            reason,
        }
    }
}
