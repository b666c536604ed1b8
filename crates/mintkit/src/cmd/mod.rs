//! Subcommands for mintkit.

pub mod abi;
pub mod config;
