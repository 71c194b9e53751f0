//! Man page renderer for a single applet.
//!
//! Help text is parsed into a structured record first so that format drift in
//! the tool aborts the page instead of producing a degraded one.

use crate::fragments::Fragments;
use anyhow::Result;

mod format;
mod model;
mod parse;

use format::{fill_template, options_to_roff, see_also_entries, sub_applets_section};
use model::ManPageDocument;
use parse::parse_help_text;

/// Run-wide inputs shared by every page.
pub struct PageContext<'a> {
    pub date: &'a str,
    pub known_applets: &'a [String],
}

/// Counts reported alongside each page for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub options_entries: usize,
    pub sub_applets: usize,
    pub include_fragments: usize,
    pub see_also_entries: usize,
}

/// Rendered man page content plus a summary of what went into it.
pub struct RenderedManPage {
    pub man_page: String,
    pub summary: RenderSummary,
}

/// Render the man page for `applet` from its `--help` output.
pub fn render_man_page(
    applet: &str,
    help_text: &str,
    fragments: &Fragments,
    context: &PageContext<'_>,
) -> Result<RenderedManPage> {
    let parsed = parse_help_text(applet, help_text)?;

    let mut extra_sections = Vec::new();
    if let Some(listing) = parsed.sub_applets.as_deref() {
        extra_sections.extend(sub_applets_section(listing));
    }
    extra_sections.extend(fragments.includes.iter().cloned());
    let see_also = see_also_entries(applet, context.known_applets);

    let summary = RenderSummary {
        options_entries: parsed.options.len(),
        sub_applets: parsed.sub_applets.as_ref().map_or(0, Vec::len),
        include_fragments: fragments.includes.len(),
        see_also_entries: see_also.len(),
    };
    let doc = ManPageDocument {
        applet,
        date: context.date,
        short_description: &parsed.short_description,
        usage: &parsed.usage,
        description: &fragments.description,
        options: options_to_roff(&parsed.options),
        extra_sections,
        see_also,
    };

    Ok(RenderedManPage {
        man_page: fill_template(&doc),
        summary,
    })
}
