//! Page output.
//!
//! Pages are written to a temporary file in the destination directory and
//! renamed into place, so a failed applet never leaves a partial page behind.
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_page(path: &Path, text: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => return Err(anyhow!("output path {} has no parent", path.display())),
    };
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    let mut staged = tempfile::Builder::new()
        .prefix(".mkman-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .with_context(|| format!("stage page in {}", parent.display()))?;
    staged
        .write_all(text.as_bytes())
        .with_context(|| format!("write staged page for {}", path.display()))?;
    set_page_permissions(staged.path())?;
    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("publish {}", path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn set_page_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
        .with_context(|| format!("chmod {}", path.display()))
}

#[cfg(not(unix))]
fn set_page_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
