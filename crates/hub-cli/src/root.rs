use std::path::{Path, PathBuf};

/// Resolve the hub root directory.
///
/// Priority:
/// 1. `--root` flag / `HUB_ROOT` env var (passed in as `explicit`)
/// 2. Nearest ancestor of `cwd` containing `.hub/`
/// 3. Nearest ancestor of `cwd` containing `.git/`
/// 4. `cwd` itself
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    nearest_with(&cwd, ".hub")
        .or_else(|| nearest_with(&cwd, ".git"))
        .unwrap_or(cwd)
}

/// The closest ancestor of `start` (inclusive) containing `marker` as a
/// directory.
fn nearest_with(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}
