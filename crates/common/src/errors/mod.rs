//! Errors and the helpers that report them.

mod endpoint;
mod fs;
pub use endpoint::EndpointError;
pub use fs::FsPathError;

use eyre::Chain;
use std::{error::Error, path::Path};

/// Returns the cause chain of `error`, outermost first.
///
/// A cause whose message is already part of the cause before it is dropped, so
/// `failed to read "a.json": No such file; No such file` collapses to its first entry.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<String> =
        Chain::new(error).map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

/// The input a failed run tripped over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Culprit<'a> {
    /// The artifact file at `path`.
    Artifact { path: &'a Path, missing: bool },
    /// The provider endpoint, if one was configured.
    Endpoint(Option<&'a str>),
}

impl<'a> Culprit<'a> {
    /// Finds the first artifact or endpoint error in the cause chain of `error`.
    pub fn find(error: &'a (dyn Error + 'static)) -> Option<Self> {
        Chain::new(error).find_map(|cause| {
            if let Some(err) = cause.downcast_ref::<FsPathError>() {
                return Some(Self::Artifact { path: err.path(), missing: err.is_not_found() });
            }
            cause.downcast_ref::<EndpointError>().map(|err| Self::Endpoint(err.url()))
        })
    }
}
