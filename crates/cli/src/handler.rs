use eyre::EyreHandler;
use itertools::Itertools;
use mintkit_common::{
    RPC_URL_ENV,
    errors::{Culprit, dedup_chain},
};
use std::{error::Error, fmt};

/// Reports errors as one line of deduplicated causes, followed by the artifact or endpoint the
/// run failed on.
pub struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    /// Creates a handler that renders the short report.
    pub fn new() -> Self {
        Self { debug_handler: None }
    }

    fn write_culprit(error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Culprit::find(error) {
            Some(Culprit::Artifact { path, missing }) => {
                write!(f, "\n\nArtifact: {}", path.display())?;
                if missing {
                    write!(f, "\nHint: compile the contracts first, or pass `--artifact <PATH>`")?;
                }
            }
            Some(Culprit::Endpoint(Some(url))) => {
                write!(f, "\n\nEndpoint: {url}")?;
                write!(f, "\nHint: `{RPC_URL_ENV}` must be the http(s) URL of a node provider")?;
            }
            // the message already names `API_URL`
            Some(Culprit::Endpoint(None)) | None => {}
        }
        Ok(())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dedup_chain(error).iter().format("; "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        self.display(error, f)?;
        Self::write_culprit(error, f)
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// Installs the mintkit [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// If `MINTKIT_DEBUG` is set, errors are reported with the full `color-eyre` report instead.
/// Panics are always reported by `color-eyre`.
pub fn install() {
    let (panic_hook, debug_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug in mintkit. Please report it.")
        .into_hooks();
    panic_hook.install();
    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os("MINTKIT_DEBUG").is_some();
    if let Err(e) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler { debug_handler: debug.then(|| debug_hook(e)) })
    })) {
        debug!("failed to install eyre error hook: {e}");
    }
}
