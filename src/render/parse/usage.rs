use crate::error::ManError;
use anyhow::{Context, Result};
use regex::Regex;

/// Return `(usage, short_description)` from the `Usage: <applet> ... : ...` line.
pub(crate) fn extract_usage(applet: &str, help_text: &str) -> Result<(String, String)> {
    let pattern = format!(r"(?m)^Usage: {} (.*) : (.*)$", regex::escape(applet));
    let re = Regex::new(&pattern).with_context(|| format!("compile usage pattern for {applet}"))?;
    let Some(caps) = re.captures(help_text) else {
        let first = help_text.lines().next().unwrap_or_default();
        return Err(ManError::malformed(applet, first, "no usage line").into());
    };
    let usage = caps[1].to_string();
    let short_description = caps[2].trim_end().to_string();
    Ok((usage, short_description))
}
