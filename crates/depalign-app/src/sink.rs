//! Output sinks: a report file (overwrite or append) or the log.

use anyhow::Context;
use camino::Utf8Path;
use depalign_settings::OutputTarget;
use std::fs::OpenOptions;
use std::io::Write;

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str, append: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("open {path}"))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("write {path}"))?;
    Ok(())
}

/// Emit a rendered report to its configured target.
///
/// A file gets the project title banner first; the log gets the body line by line.
pub fn emit_report(target: &OutputTarget, title: &str, body: &str) -> anyhow::Result<()> {
    match target {
        OutputTarget::Log => {
            for line in body.lines() {
                tracing::info!("{line}");
            }
        }
        OutputTarget::File { path, append } => {
            write_text(path, title, *append)?;
            write_text(path, body, true)?;
            tracing::info!("Wrote alignment report to: {path}");
        }
    }
    Ok(())
}
