//! Contract build artifacts as written by Hardhat and Foundry.

use crate::errors::FsPathError;
use alloy_json_abi::JsonAbi;
use eyre::{OptionExt, Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

/// The field holding the contract's interface descriptor.
pub const ABI_FIELD: &str = "abi";

/// The field Hardhat uses for the contract name.
pub const CONTRACT_NAME_FIELD: &str = "contractName";

/// A compiler artifact loaded from disk.
///
/// The document is kept exactly as it was written: key order and unknown fields are preserved so
/// the ABI can be passed through verbatim. Any JSON value other than `null` is accepted; a
/// document that is not an object simply has no `abi`.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    path: PathBuf,
    value: Value,
}

impl ContractArtifact {
    /// Reads and parses the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FsPathError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading artifact");
        let value = crate::fs::read_json_file(path)?;
        Self::new(path, value)
    }

    /// Parses an artifact from its JSON source. `path` is only used for error reporting.
    pub fn from_json_str(path: impl Into<PathBuf>, s: &str) -> Result<Self, FsPathError> {
        let path = path.into();
        match serde_json::from_str(crate::fs::strip_bom(s)) {
            Ok(value) => Self::new(path, value),
            Err(source) => Err(FsPathError::read_json(source, path)),
        }
    }

    fn new(path: impl Into<PathBuf>, value: Value) -> Result<Self, FsPathError> {
        let path = path.into();
        if value.is_null() {
            return Err(FsPathError::Null { path });
        }
        Ok(Self { path, value })
    }

    /// The file this artifact was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw interface descriptor, if the artifact has one.
    pub fn abi(&self) -> Option<&Value> {
        self.value.get(ABI_FIELD)
    }

    /// Returns the `contractName` recorded by Hardhat, if any.
    pub fn contract_name(&self) -> Option<&str> {
        self.value.get(CONTRACT_NAME_FIELD).and_then(Value::as_str)
    }

    /// Parses the interface descriptor into a typed [`JsonAbi`].
    pub fn json_abi(&self) -> Result<JsonAbi> {
        let abi = self
            .abi()
            .ok_or_eyre(format!("no `{ABI_FIELD}` field in {}", self.path.display()))?;
        JsonAbi::deserialize(abi)
            .wrap_err_with(|| format!("invalid `{ABI_FIELD}` in {}", self.path.display()))
    }
}

/// Directory conventions of the supported build tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactLayout {
    /// `artifacts/contracts/<Name>.sol/<Name>.json`
    #[default]
    Hardhat,
    /// `out/<Name>.sol/<Name>.json`
    Foundry,
}

impl ArtifactLayout {
    /// Returns the artifacts directory relative to the project root.
    pub const fn artifacts_dir(self) -> &'static str {
        match self {
            Self::Hardhat => "artifacts",
            Self::Foundry => "out",
        }
    }

    /// Returns the artifact file of `contract` under `root`.
    ///
    /// Assumes the contract lives in a source file of the same name.
    pub fn artifact_path(self, root: &Path, contract: &str) -> PathBuf {
        let mut path = root.join(self.artifacts_dir());
        if self == Self::Hardhat {
            path.push("contracts");
        }
        path.join(format!("{contract}.sol")).join(format!("{contract}.json"))
    }

    /// Determines the layout used by the project at `root`.
    ///
    /// Hardhat's `artifacts` directory takes precedence unless it does not exist but Foundry's
    /// `out` does.
    pub fn detect(root: &Path) -> Self {
        let hardhat = root.join(Self::Hardhat.artifacts_dir());
        let foundry = root.join(Self::Foundry.artifacts_dir());
        if !hardhat.is_dir() && foundry.is_dir() { Self::Foundry } else { Self::Hardhat }
    }
}

impl fmt::Display for ArtifactLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hardhat => "hardhat",
            Self::Foundry => "foundry",
        })
    }
}

impl FromStr for ArtifactLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hardhat" => Ok(Self::Hardhat),
            "foundry" | "forge" => Ok(Self::Foundry),
            _ => Err(format!("unknown artifact layout `{s}`, expected `hardhat` or `foundry`")),
        }
    }
}
