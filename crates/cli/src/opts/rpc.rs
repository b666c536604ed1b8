use clap::Parser;
use mintkit_config::figment::{
    self, Metadata, Profile,
    value::{Dict, Map},
};
use serde::Serialize;

/// Node provider options.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "Provider options")]
pub struct RpcOpts {
    /// The RPC endpoint URL.
    ///
    /// Overrides `API_URL` from the environment or `.env`.
    #[arg(short = 'r', long = "rpc-url", alias = "url", value_name = "URL")]
    #[serde(rename = "rpc_url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// How often to retry a rate limited request.
    #[arg(long, value_name = "RETRIES")]
    #[serde(rename = "max_retry", skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    /// Initial backoff in milliseconds after a rate limited request.
    #[arg(long, value_name = "MILLIS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_backoff: Option<u64>,

    /// Sets the number of assumed available compute units per second for this provider.
    #[arg(long, alias = "cups", value_name = "CUPS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_units_per_second: Option<u64>,
}

impl figment::Provider for RpcOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("RpcOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}

impl RpcOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(url) = &self.url {
            dict.insert("rpc_url".into(), url.clone().into());
        }
        if let Some(retries) = self.retries {
            dict.insert("max_retry".into(), retries.into());
        }
        if let Some(backoff) = self.initial_backoff {
            dict.insert("initial_backoff".into(), backoff.into());
        }
        if let Some(cups) = self.compute_units_per_second {
            dict.insert("compute_units_per_second".into(), cups.into());
        }
        dict
    }
}
