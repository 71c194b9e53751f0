//! Hand-written page fragments that live next to the generator.
//!
//! `<applet>.desc` supplies the long description and every
//! `<applet>-<suffix>.include` adds a verbatim roff section.
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fragment content found for one applet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub description: String,
    /// One entry per include file, in file name order.
    pub includes: Vec<String>,
}

pub fn load_fragments(include_dir: &Path, applet: &str) -> Result<Fragments> {
    let description = load_description(&include_dir.join(format!("{applet}.desc")))?;
    let mut includes = Vec::new();
    for path in include_paths(include_dir, applet)? {
        let text =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        tracing::debug!(applet, path = %path.display(), "loaded include fragment");
        includes.push(
            text.lines()
                .map(str::trim_end)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    Ok(Fragments {
        description,
        includes,
    })
}

fn load_description(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.trim_end().to_string()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}

fn include_paths(include_dir: &Path, applet: &str) -> Result<Vec<PathBuf>> {
    let dir = include_dir
        .to_str()
        .ok_or_else(|| anyhow!("include dir {} is not valid UTF-8", include_dir.display()))?;
    let pattern = format!(
        "{}/{}-*.include",
        glob::Pattern::escape(dir),
        glob::Pattern::escape(applet)
    );
    let mut paths = glob::glob(&pattern)
        .with_context(|| format!("invalid include pattern {pattern}"))?
        .collect::<Result<Vec<_>, _>>()
        .context("scan include fragments")?;
    paths.sort();
    Ok(paths)
}
