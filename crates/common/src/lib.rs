//! # mintkit-common
//!
//! Common utilities for building and using mintkit's tools.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

#[macro_use]
pub mod io;

pub mod artifact;
pub mod constants;
pub mod errors;
pub mod fs;
pub mod provider;

pub use artifact::{ArtifactLayout, ContractArtifact};
pub use constants::*;
pub use provider::{ProviderBuilder, RetryProvider};
