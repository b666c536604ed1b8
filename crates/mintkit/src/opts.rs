use crate::cmd::{abi::AbiArgs, config::ConfigArgs};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Inspect the contract artifacts of an NFT minting project.
#[derive(Parser)]
#[command(name = "mintkit", version, propagate_version = true)]
pub struct Mintkit {
    #[command(subcommand)]
    pub cmd: MintkitSubcommand,
}

#[derive(Subcommand)]
pub enum MintkitSubcommand {
    /// Print the ABI of a compiled contract as JSON.
    ///
    /// The provider endpoint (`API_URL`) is validated before the artifact is read.
    #[command(visible_alias = "a")]
    Abi(AbiArgs),

    /// Display the current config.
    #[command(visible_alias = "co")]
    Config(ConfigArgs),
}

impl MintkitSubcommand {
    /// Returns the project root passed with `--root`, if any.
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Abi(cmd) => cmd.artifact.root.as_deref(),
            Self::Config(cmd) => cmd.artifact.root.as_deref(),
        }
    }
}
