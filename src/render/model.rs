/// Structured view of one applet's `--help` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedHelp {
    pub(crate) usage: String,
    pub(crate) short_description: String,
    pub(crate) options: Vec<OptionSpec>,
    pub(crate) sub_applets: Option<Vec<String>>,
}

/// One line of the `Options:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionSpec {
    /// Short flag first, then the long alias when present.
    pub(crate) flags: Vec<String>,
    pub(crate) takes_argument: bool,
    pub(crate) description: String,
}

/// Everything the page template needs, already rendered to roff where noted.
pub(super) struct ManPageDocument<'a> {
    pub(super) applet: &'a str,
    pub(super) date: &'a str,
    pub(super) short_description: &'a str,
    pub(super) usage: &'a str,
    pub(super) description: &'a str,
    /// Roff `.TP` entries, one option per three lines.
    pub(super) options: String,
    pub(super) extra_sections: Vec<String>,
    pub(super) see_also: Vec<String>,
}
