//! Generator configuration.
//!
//! Settings are layered: CLI flags win over the optional JSON config file,
//! which wins over the built-in defaults.
use crate::cli::RootArgs;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOL: &str = "q";
pub const DEFAULT_APPLETS_COMMAND: &str = "./applets.sh";
pub const DEFAULT_INCLUDE_DIR: &str = "include";
pub const DEFAULT_OUT_DIR: &str = ".";
const DATE_FORMAT: &str = "%b %Y";

/// On-disk config; every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tool: Option<String>,
    pub applets_command: Option<String>,
    pub include_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub date: Option<String>,
    pub jobs: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tool: String,
    pub discovery_command: Vec<String>,
    pub include_dir: PathBuf,
    pub out_dir: PathBuf,
    pub date: String,
    /// `None` lets the worker pool size itself to the CPU count.
    pub jobs: Option<usize>,
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: FileConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &FileConfig) -> Result<()> {
    if config.jobs == Some(0) {
        return Err(anyhow!("jobs must be at least 1"));
    }
    if let Some(tool) = config.tool.as_deref() {
        if tool.trim().is_empty() {
            return Err(anyhow!("tool must be non-empty"));
        }
    }
    if let Some(command) = config.applets_command.as_deref() {
        split_command(command)?;
    }
    Ok(())
}

/// Merge CLI flags over the config file and defaults.
pub fn resolve_settings(args: &RootArgs, file: FileConfig) -> Result<Settings> {
    let jobs = args.jobs.or(file.jobs);
    if jobs == Some(0) {
        return Err(anyhow!("--jobs must be at least 1"));
    }
    let command = args
        .applets_cmd
        .clone()
        .or(file.applets_command)
        .unwrap_or_else(|| DEFAULT_APPLETS_COMMAND.to_string());
    Ok(Settings {
        tool: args
            .tool
            .clone()
            .or(file.tool)
            .unwrap_or_else(|| DEFAULT_TOOL.to_string()),
        discovery_command: split_command(&command)?,
        include_dir: args
            .include_dir
            .clone()
            .or(file.include_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INCLUDE_DIR)),
        out_dir: args
            .out_dir
            .clone()
            .or(file.out_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        date: args
            .date
            .clone()
            .or(file.date)
            .unwrap_or_else(current_month),
        jobs,
    })
}

/// Locate the tool binary so a missing tool fails once instead of per applet.
pub fn resolve_tool(tool: &str) -> Result<PathBuf> {
    which::which(tool).with_context(|| format!("locate tool {tool:?}"))
}

fn split_command(command: &str) -> Result<Vec<String>> {
    let words = shell_words::split(command)
        .with_context(|| format!("parse applets command {command:?}"))?;
    if words.is_empty() {
        return Err(anyhow!("applets command must be non-empty"));
    }
    Ok(words)
}

fn current_month() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
