mod options;
mod sections;
mod usage;

use super::model::ParsedHelp;
use anyhow::Result;

pub(crate) use options::parse_options;
pub(crate) use sections::extract_sub_applets;
pub(crate) use usage::extract_usage;

/// Parse the full help text of `applet`.
///
/// Fails with [`crate::error::ManError::MalformedHelp`] when the usage line or
/// any option line does not follow the expected format.
pub(crate) fn parse_help_text(applet: &str, help_text: &str) -> Result<ParsedHelp> {
    let (usage, short_description) = extract_usage(applet, help_text)?;
    let options = parse_options(applet, help_text)?;
    let sub_applets = extract_sub_applets(help_text);
    Ok(ParsedHelp {
        usage,
        short_description,
        options,
        sub_applets,
    })
}
