use super::model::{ManPageDocument, OptionSpec};
use crate::templates::{
    BUG_REPORT_PRODUCT, BUG_REPORT_URL, COMMON_AUTHORS, MANUAL_SOURCE, SUB_APPLETS_HEADING,
};
use std::collections::BTreeSet;

pub(super) fn options_to_roff(options: &[OptionSpec]) -> String {
    let mut lines = Vec::with_capacity(options.len() * 3);
    for option in options {
        lines.push(".TP".to_string());
        lines.push(escape_option(&flags_to_roff(option)));
        lines.push(option.description.clone());
    }
    lines.join("\n")
}

fn flags_to_roff(option: &OptionSpec) -> String {
    option
        .flags
        .iter()
        .map(|flag| {
            if option.takes_argument {
                format!(r"\fB{flag}\fR \fI<arg>\fR")
            } else {
                format!(r"\fB{flag}\fR")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn sub_applets_section(listing: &[String]) -> Vec<String> {
    let mut lines = vec![
        ".SH APPLETS".to_string(),
        ".nf".to_string(),
        format!(".B {SUB_APPLETS_HEADING}"),
    ];
    lines.extend(listing.iter().cloned());
    lines.push(".fi".to_string());
    lines
}

/// Cross references to every known applet other than `applet`.
pub(super) fn see_also_entries(applet: &str, known_applets: &[String]) -> Vec<String> {
    known_applets
        .iter()
        .map(String::as_str)
        .filter(|name| *name != applet)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|name| format!(".BR {name} (1)"))
        .collect()
}

pub(super) fn fill_template(doc: &ManPageDocument<'_>) -> String {
    let ManPageDocument {
        applet,
        date,
        short_description,
        usage,
        description,
        options,
        extra_sections,
        see_also,
    } = doc;
    let extra_sections = extra_sections.join("\n");
    let authors = COMMON_AUTHORS.join("\n");
    let see_also = see_also.join(",\n");
    format!(
        r#".TH {applet} "1" "{date}" "{MANUAL_SOURCE}" "{applet}"
.SH NAME
{applet} \- {short_description}
.SH SYNOPSIS
.B {applet}
\fI{usage}\fR
.SH DESCRIPTION
{description}
.SH OPTIONS
{options}
{extra_sections}
.SH "REPORTING BUGS"
Please report bugs via {BUG_REPORT_URL}
.br
{BUG_REPORT_PRODUCT}
.SH AUTHORS
.nf
{authors}
.fi
.SH "SEE ALSO"
{see_also}
"#
    )
}

fn escape_option(text: &str) -> String {
    text.replace('-', r"\-")
}
