//! Contains various `std::fs` wrapper functions that also contain the target path in their errors.

use crate::errors::FsPathError;
use serde::de::DeserializeOwned;
use std::path::Path;

type Result<T> = std::result::Result<T, FsPathError>;

/// Wrapper for [`std::fs::read_to_string`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| FsPathError::read(err, path))
}

/// Reads the JSON file and deserialize it into the provided type.
///
/// A leading byte order mark is skipped, as Node's `require` does.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let s = read_to_string(path)?;
    serde_json::from_str(strip_bom(&s)).map_err(|source| FsPathError::read_json(source, path))
}

/// Strips a leading UTF-8 byte order mark.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{feff}').unwrap_or(s)
}
