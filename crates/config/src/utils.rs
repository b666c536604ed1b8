//! Utility functions

use crate::Config;
use std::path::{Path, PathBuf};

/// Files whose presence marks a project root.
const ROOT_MARKERS: &[&str] =
    &[Config::FILE_NAME, "hardhat.config.js", "hardhat.config.ts", "foundry.toml"];

/// Returns the closest ancestor of `cwd` (including `cwd` itself) that contains a
/// `mintkit.toml`, a hardhat config or a `foundry.toml`.
///
/// Falls back to `cwd` if no marker is found.
pub fn find_project_root(cwd: &Path) -> PathBuf {
    let cwd = dunce::canonicalize(cwd).unwrap_or_else(|_| cwd.to_path_buf());
    for dir in cwd.ancestors() {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
            trace!(root = %dir.display(), "found project root");
            return dir.to_path_buf();
        }
    }
    cwd
}
