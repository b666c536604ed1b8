use eyre::{Result, WrapErr};
use mintkit_common::{ProviderBuilder, RetryProvider};
use mintkit_config::{Config, figment::Provider, find_project_root};
use std::path::Path;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Initializes a tracing Subscriber for logging.
///
/// Logs are written to stderr; stdout is reserved for command output.
pub fn subscriber() {
    let registry = tracing_subscriber::Registry::default().with(env_filter());
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);
    if let Err(err) = registry.with(fmt).try_init() {
        debug!("failed to install tracing subscriber: {err}");
    }
}

fn env_filter() -> EnvFilter {
    const DEFAULT_DIRECTIVES: &[&str] = &[
        // Low level transport crates.
        "hyper=off",
        "hyper_util=off",
        "reqwest=off",
        "rustls=off",
    ];
    let mut filter = EnvFilter::from_default_env();
    for &directive in DEFAULT_DIRECTIVES {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Loads the dotenv files of the project at `root`, or of the project containing the working
/// directory, and of the working directory itself, ignoring potential failure.
///
/// We could use `warn!` here, but that would imply that the dotenv file can't be parsed or read,
/// which is not an error since it's optional. Variables that are already set in the environment
/// take precedence over the files.
pub fn load_dotenv(root: Option<&Path>) {
    let load = |p: &Path| {
        let file = p.join(".env");
        match dotenvy::from_path(&file) {
            Ok(()) => trace!(path = %file.display(), "loaded dotenv file"),
            Err(err) if err.not_found() => {}
            Err(err) => debug!(path = %file.display(), %err, "failed to load dotenv file"),
        }
    };

    let Ok(cwd) = std::env::current_dir() else { return };
    let root = root.map_or_else(|| find_project_root(&cwd), Path::to_path_buf);
    load(&root);
    if !is_same_dir(&cwd, &root) {
        load(&cwd);
    }
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    a == b || a.canonicalize().ok().zip(b.canonicalize().ok()).is_some_and(|(a, b)| a == b)
}

/// Loads the config of the project at `root`, or of the project containing the working
/// directory, with `opts` merged on top.
pub fn load_config_with<P: Provider>(root: Option<&Path>, opts: P) -> Result<Config> {
    let figment = match root {
        Some(root) => Config::figment_with_root(root),
        None => Config::figment(),
    };
    Config::from_provider(figment.merge(opts)).wrap_err("failed to load mintkit config")
}

/// Returns a [RetryProvider] instantiated using [Config]'s RPC settings.
///
/// Fails if no endpoint is configured or the endpoint is not a valid URL.
pub fn get_provider(config: &Config) -> Result<RetryProvider> {
    let builder = ProviderBuilder::new(config.rpc_url()?)
        .max_retry(config.max_retry)
        .initial_backoff(config.initial_backoff)
        .compute_units_per_second(config.compute_units_per_second);
    let url = builder.url()?;
    debug!(%url, "constructing provider");
    Ok(builder.build()?)
}
