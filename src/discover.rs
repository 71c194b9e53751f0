//! Applet list resolution: explicit arguments or the discovery command.
use crate::error::ManError;
use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;

/// Reduce `./qdepends.1` or `qfile.1` style arguments to a bare applet name.
pub fn normalize_applet_name(arg: &str) -> Option<String> {
    let file_name = Path::new(arg).file_name()?.to_str()?;
    let name = file_name.split('.').next().unwrap_or_default();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Normalize, deduplicate and sort applet arguments.
pub fn normalize_applets<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .filter_map(|arg| normalize_applet_name(arg.as_ref()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Run the discovery command and return the applets it lists, one per line.
pub fn discover_applets(command: &[String]) -> Result<Vec<String>, ManError> {
    let display = command.join(" ");
    let failure = |reason: String| ManError::Discovery {
        command: display.clone(),
        reason,
    };
    let (program, args) = command
        .split_first()
        .ok_or_else(|| failure("empty command".to_string()))?;
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|err| failure(err.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.lines().next().unwrap_or_default().trim().to_string();
        return Err(failure(format!("{} {detail}", output.status).trim_end().to_string()));
    }
    let applets = parse_applet_list(&String::from_utf8_lossy(&output.stdout));
    if applets.is_empty() {
        return Err(failure("no applets listed".to_string()));
    }
    let command_line = display.as_str();
    tracing::info!(count = applets.len(), command = %command_line, "discovered applets");
    Ok(applets)
}

pub(crate) fn parse_applet_list(stdout: &str) -> Vec<String> {
    let names = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    normalize_applets(&names)
}
