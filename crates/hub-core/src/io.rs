use crate::error::Result;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `data` to `path` through a sibling tempfile and an atomic rename.
/// A crash mid-write never leaves a truncated state file behind.
pub fn atomic_write(path: &Path, data: &str) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))?;
    tmp.write_all(data.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Add `entry` to `root/.gitignore` unless some line already equals it.
/// The file is rewritten whole, newline-terminated.
pub fn ensure_gitignore_entry(root: &Path, entry: &str) -> Result<()> {
    let gitignore = root.join(".gitignore");
    let existing = match std::fs::read_to_string(&gitignore) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    // Exact line match; substring checks would treat ".hub/backup" as present.
    if existing.lines().any(|line| line == entry) {
        return Ok(());
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(entry);
    updated.push('\n');
    atomic_write(&gitignore, &updated)
}
