//! Commonly used helpers to construct `Provider`s

use crate::{
    ALCHEMY_FREE_TIER_CUPS, DEFAULT_INITIAL_BACKOFF, DEFAULT_MAX_RETRY, errors::EndpointError,
};
use alloy_network::AnyNetwork;
use alloy_provider::RootProvider;
use alloy_rpc_client::ClientBuilder;
use alloy_transport::layers::RetryBackoffLayer;
use alloy_transport_http::Http;
use url::Url;

/// Helper type alias for a retry provider
pub type RetryProvider = RootProvider<AnyNetwork>;

/// Helper type to construct a `RetryProvider`
///
/// The provider is lazy: no request is sent until it is used.
#[derive(Debug)]
pub struct ProviderBuilder {
    // Note: this is a result, so we can easily chain builder calls
    url: Result<Url, EndpointError>,
    max_retry: u32,
    initial_backoff: u64,
    /// available CUPS
    compute_units_per_second: u64,
}

impl ProviderBuilder {
    /// Creates a new builder instance
    pub fn new(url_str: &str) -> Self {
        let url_str = url_str.trim();

        // invalid url: non-prefixed URL scheme is not allowed, so we prepend the default http
        // prefix
        let url = if needs_scheme(url_str) {
            Url::parse(&format!("http://{url_str}"))
        } else {
            Url::parse(url_str)
        }
        .map_err(|source| EndpointError::Invalid { url: url_str.to_string(), source });

        Self {
            url,
            max_retry: DEFAULT_MAX_RETRY,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            // alchemy max cpus <https://docs.alchemy.com/reference/compute-units#what-are-cups-compute-units-per-second>
            compute_units_per_second: ALCHEMY_FREE_TIER_CUPS,
        }
    }

    /// How often to retry a failed request
    pub fn max_retry(mut self, max_retry: u32) -> Self {
        self.max_retry = max_retry;
        self
    }

    /// The starting backoff delay in milliseconds to use after the first failed request
    pub fn initial_backoff(mut self, initial_backoff: u64) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Sets the number of assumed available compute units per second
    pub fn compute_units_per_second(mut self, compute_units_per_second: u64) -> Self {
        self.compute_units_per_second = compute_units_per_second;
        self
    }

    /// Returns the parsed endpoint.
    pub fn url(&self) -> Result<&Url, EndpointError> {
        self.url.as_ref().map_err(Clone::clone)
    }

    /// Constructs the `RetryProvider` taking all configs into account.
    pub fn build(self) -> Result<RetryProvider, EndpointError> {
        let Self { url, max_retry, initial_backoff, compute_units_per_second } = self;
        let url = url?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(EndpointError::UnsupportedScheme {
                    scheme: scheme.to_string(),
                    url: url.to_string(),
                });
            }
        }

        let is_local = is_local_url(&url);
        debug!(%url, is_local, max_retry, initial_backoff, "building provider");

        let client = ClientBuilder::default()
            .layer(RetryBackoffLayer::new(max_retry, initial_backoff, compute_units_per_second))
            .transport(Http::new(url), is_local);

        Ok(RootProvider::new(client))
    }
}

/// `localhost:8545` parses as a URL with scheme `localhost`, so a bare `host:port` needs the
/// scheme spelled out.
fn needs_scheme(url: &str) -> bool {
    if url.contains("://") {
        return false;
    }
    match url.split_once(':') {
        Some((_, port)) => port.split('/').next().is_some_and(|p| p.parse::<u16>().is_ok()),
        None => false,
    }
}

fn is_local_url(url: &Url) -> bool {
    match url.host_str() {
        Some(host) => matches!(host, "localhost" | "127.0.0.1" | "[::1]" | "0.0.0.0"),
        None => false,
    }
}
