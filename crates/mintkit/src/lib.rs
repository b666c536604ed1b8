//! Mintkit
//!
//! Inspects the contract artifacts of an NFT minting project.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

#[macro_use]
extern crate mintkit_common;

pub mod args;
pub mod cmd;
pub mod opts;
