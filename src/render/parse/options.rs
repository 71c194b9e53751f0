use super::super::model::OptionSpec;
use crate::error::ManError;
use anyhow::Result;

const OPTIONS_MARKER: &str = "Options: ";
const ARG_MARKER: &str = "<arg>";
const DESC_MARKER: &str = "*";

/// Parse the option lines that follow the first `Options: ` line.
///
/// Parsing stops at the first blank line. Help text without the marker has no
/// options.
pub(crate) fn parse_options(applet: &str, help_text: &str) -> Result<Vec<OptionSpec>> {
    let mut lines = help_text.lines();
    if !lines.by_ref().any(|line| line.starts_with(OPTIONS_MARKER)) {
        return Ok(Vec::new());
    }
    let mut options = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            break;
        }
        options.push(parse_option_line(applet, line)?);
    }
    tracing::debug!(applet, count = options.len(), "parsed option lines");
    Ok(options)
}

fn parse_option_line(applet: &str, line: &str) -> Result<OptionSpec> {
    let mut tokens = line.split_whitespace().peekable();
    let Some(first) = tokens.next() else {
        return Err(ManError::malformed(applet, line, "empty option line").into());
    };
    let mut flags = vec![strip_separator(first)];
    if let Some(long) = tokens.next_if(|token| token.starts_with('-')) {
        flags.push(strip_separator(long));
    }
    let takes_argument = tokens.next_if(|token| *token == ARG_MARKER).is_some();
    if tokens.next() != Some(DESC_MARKER) {
        return Err(ManError::malformed(applet, line, "missing `*` before description").into());
    }
    let description = tokens.collect::<Vec<_>>().join(" ");
    Ok(OptionSpec {
        flags,
        takes_argument,
        description,
    })
}

fn strip_separator(flag: &str) -> String {
    flag.trim_end_matches(',').to_string()
}
