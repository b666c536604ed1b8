use crate::RPC_URL_ENV;

/// Errors about the configured node provider endpoint.
#[derive(Clone, Debug, thiserror::Error)]
pub enum EndpointError {
    /// Neither the environment, `.env`, the config file nor a flag set an endpoint.
    #[error(
        "no RPC endpoint configured; set `{}` (e.g. in `.env`) or pass `--rpc-url`",
        RPC_URL_ENV
    )]
    Missing,
    /// The endpoint is not a URL.
    #[error("invalid provider URL {url:?}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The endpoint is a URL the HTTP transport cannot talk to.
    #[error("unsupported provider URL scheme {scheme:?} in {url}")]
    UnsupportedScheme { scheme: String, url: String },
}

impl EndpointError {
    /// Returns the endpoint as it was configured, if there was one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Invalid { url, .. } | Self::UnsupportedScheme { url, .. } => Some(url),
        }
    }
}
