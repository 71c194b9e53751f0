//! CLI argument parsing for the man page generator.
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Root CLI entrypoint.
///
/// Every flag is optional: unset flags fall back to the config file and then
/// to the built-in defaults in [`crate::config`].
#[derive(Parser, Debug)]
#[command(
    name = "mkman",
    version,
    about = "Generate man pages for the applets of a multi-call tool",
    after_help = "With no APPLETS, the applet list comes from the discovery command.\n\nExamples:\n  mkman\n  mkman qfile qlist\n  mkman --out-dir man --include-dir man/include ./man/qdepends.1"
)]
pub struct RootArgs {
    /// Applet names or page file names (e.g. qfile, qfile.1, ./man/qfile.1)
    #[arg(value_name = "APPLETS")]
    pub applets: Vec<String>,

    /// Multi-call tool invoked as `<tool> <applet> --help`
    #[arg(long, value_name = "PATH")]
    pub tool: Option<String>,

    /// Command that prints the supported applets, one per line
    #[arg(long, value_name = "CMD")]
    pub applets_cmd: Option<String>,

    /// Directory holding <applet>.desc and <applet>-*.include fragments
    #[arg(long, value_name = "DIR")]
    pub include_dir: Option<PathBuf>,

    /// Directory the <applet>.1 pages are written to
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Date printed in the page header (defaults to the current month)
    #[arg(long, value_name = "TEXT")]
    pub date: Option<String>,

    /// Number of worker threads (defaults to the CPU count)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        RootArgs::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_positional_applets() {
        let args = RootArgs::try_parse_from([
            "mkman", "-vv", "-j", "4", "--out-dir", "man", "qfile.1", "qlist",
        ])
        .expect("parse");
        assert_eq!(args.applets, vec!["qfile.1", "qlist"]);
        assert_eq!(args.jobs, Some(4));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.out_dir, Some(PathBuf::from("man")));
        assert!(args.tool.is_none());
    }
}
