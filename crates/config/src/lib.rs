//! # mintkit-config
//!
//! Mintkit configuration.
//!
//! Values are merged from several sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `mintkit.toml` in the project root
//! 3. `MINTKIT_*` environment variables
//! 4. `API_URL`, the endpoint variable of hardhat/alchemy projects
//! 5. command line options, merged by the caller

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use mintkit_common::{
    ALCHEMY_FREE_TIER_CUPS, ArtifactLayout, DEFAULT_CONTRACT, DEFAULT_INITIAL_BACKOFF,
    DEFAULT_MAX_RETRY, RPC_URL_ENV, errors::EndpointError,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod utils;
pub use utils::find_project_root;

pub use figment;

/// Mintkit configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The project root. Relative paths are resolved against it.
    #[serde(default, skip_serializing)]
    pub root: PathBuf,
    /// The node provider endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    /// The contract whose artifact is read when no artifact path is given.
    pub contract: String,
    /// Explicit path to the artifact file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    /// The artifact directory convention. Detected from the project root if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ArtifactLayout>,
    /// How often to retry a rate limited request.
    pub max_retry: u32,
    /// Initial backoff in milliseconds for rate limited requests.
    pub initial_backoff: u64,
    /// Assumed available compute units per second of the provider.
    pub compute_units_per_second: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            rpc_url: None,
            contract: DEFAULT_CONTRACT.to_string(),
            artifact: None,
            layout: None,
            max_retry: DEFAULT_MAX_RETRY,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            compute_units_per_second: ALCHEMY_FREE_TIER_CUPS,
        }
    }
}

impl Config {
    /// The name of the config file.
    pub const FILE_NAME: &'static str = "mintkit.toml";

    /// Prefix of environment variables that override config keys.
    pub const ENV_PREFIX: &'static str = "MINTKIT_";

    /// Loads the config of the project containing the current working directory.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_provider(Self::figment())
    }

    /// Loads the config of the project at `root`.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Self::from_provider(Self::figment_with_root(root))
    }

    /// Extracts a `Config` from `provider`.
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, figment::Error> {
        trace!("load config with provider: {:?}", provider.metadata());
        Figment::from(provider).extract()
    }

    /// Returns the default figment for the project containing the current working directory.
    pub fn figment() -> Figment {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::figment_with_root(find_project_root(&cwd))
    }

    /// Returns the default figment for the project at `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let root = root.as_ref();
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(root.join(Self::FILE_NAME)))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["DEBUG", "ROOT"]))
            .merge(Env::raw().only(&[RPC_URL_ENV]).map(|_| "rpc_url".into()))
            .merge(ProjectRoot(root.to_path_buf()))
    }

    /// Returns the configured provider endpoint.
    pub fn rpc_url(&self) -> Result<&str, EndpointError> {
        match self.rpc_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(EndpointError::Missing),
        }
    }

    /// Returns the artifact layout, detecting it from the project root if unset.
    pub fn layout(&self) -> ArtifactLayout {
        self.layout.unwrap_or_else(|| ArtifactLayout::detect(&self.root))
    }

    /// Returns the path of the artifact to read.
    pub fn artifact_path(&self) -> PathBuf {
        match &self.artifact {
            Some(path) => self.root.join(path),
            None => self.layout().artifact_path(&self.root, &self.contract),
        }
    }

    /// Serializes the configuration to a TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Sets the `root` key.
struct ProjectRoot(PathBuf);

impl Provider for ProjectRoot {
    fn metadata(&self) -> Metadata {
        Metadata::named("project root")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::default("root", &self.0).data()
    }
}
