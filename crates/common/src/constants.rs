//! Commonly used constants.

/// The contract whose artifact is printed when no contract is named.
pub const DEFAULT_CONTRACT: &str = "MyNFT";

/// The environment variable holding the node provider endpoint.
pub const RPC_URL_ENV: &str = "API_URL";

/// Alchemy free tier compute units per second.
///
/// See also <https://docs.alchemy.com/reference/compute-units#what-are-cups-compute-units-per-second>
pub const ALCHEMY_FREE_TIER_CUPS: u64 = 330;

/// Default number of retries for rate limited requests.
pub const DEFAULT_MAX_RETRY: u32 = 8;

/// Default initial backoff in milliseconds after a rate limited request.
pub const DEFAULT_INITIAL_BACKOFF: u64 = 800;
