use std::{
    io,
    path::{Path, PathBuf},
};

/// Various error variants for `fs` operations that serve as an addition to the io::Error which
/// does not provide any information about the path.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    /// Provides additional path context for [`std::fs::read_to_string`].
    #[error("failed to read from {path:?}: {source}")]
    Read { source: io::Error, path: PathBuf },
    /// Provides additional path context for [`serde_json::from_str`].
    #[error("failed to deserialize JSON from {path:?}: {source}")]
    ReadJson { source: serde_json::Error, path: PathBuf },
    /// The JSON document was `null`, which has no fields to look up.
    #[error("{path:?} contains `null` instead of an artifact")]
    Null { path: PathBuf },
}

impl FsPathError {
    /// Returns the complementary error variant for [`std::fs::read_to_string`].
    pub fn read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read { source, path: path.into() }
    }

    /// Returns the complementary error variant when reading JSON from a file.
    pub fn read_json(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        Self::ReadJson { source, path: path.into() }
    }

    /// Returns true if the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Returns the path this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::ReadJson { path, .. } | Self::Null { path } => path,
        }
    }
}
