const SUB_APPLETS_MARKER: &str = "Currently defined applets:";

/// Lines listed under `Currently defined applets:`, kept verbatim.
///
/// The listing ends at the next blank line or at the end of the text.
pub(crate) fn extract_sub_applets(help_text: &str) -> Option<Vec<String>> {
    let mut lines = help_text.lines();
    lines
        .by_ref()
        .find(|line| line.trim_end() == SUB_APPLETS_MARKER)?;
    Some(
        lines
            .take_while(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
    )
}
