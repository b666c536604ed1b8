use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use mintkit_cli::{
    opts::{ArtifactOpts, RpcOpts},
    utils,
};
use mintkit_common::ContractArtifact;
use mintkit_config::{
    Config,
    figment::{Figment, providers::Serialized},
};

/// Output formats of `mintkit abi`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AbiFormat {
    /// The ABI exactly as stored in the artifact.
    #[default]
    Json,
    /// A Solidity interface generated from the ABI.
    Sol,
}

/// CLI arguments for `mintkit abi`.
#[derive(Clone, Debug, Parser)]
pub struct AbiArgs {
    /// The name of the contract whose artifact is read.
    ///
    /// Defaults to `contract` from the config, `MyNFT` if unset.
    #[arg(value_name = "CONTRACT")]
    pub contract: Option<String>,

    /// The output format.
    #[arg(long, short, value_enum, default_value_t)]
    pub format: AbiFormat,

    /// Pretty print the JSON output. Ignored for Solidity output.
    #[arg(long)]
    pub pretty: bool,

    /// Fail if the artifact has no `abi` field instead of printing `null`.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub artifact: ArtifactOpts,

    #[command(flatten)]
    pub rpc: RpcOpts,
}

impl AbiArgs {
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;

        // the provider is never queried, building it only validates the endpoint
        let _provider = utils::get_provider(&config)?;

        let path = config.artifact_path();
        debug!(path = %path.display(), format = ?self.format, "printing abi");
        let artifact = ContractArtifact::load(&path).wrap_err("failed to load contract artifact")?;
        let output = self.render(&artifact, &config)?;
        sh_println!("{output}")?;

        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        let mut opts = Figment::from(self.artifact.clone()).merge(self.rpc.clone());
        if let Some(contract) = &self.contract {
            opts = opts.merge(Serialized::default("contract", contract));
        }
        utils::load_config_with(self.artifact.root.as_deref(), opts)
    }

    /// Renders the artifact's ABI in the selected format, without a trailing newline.
    pub fn render(&self, artifact: &ContractArtifact, config: &Config) -> Result<String> {
        match self.format {
            AbiFormat::Json => {
                let Some(abi) = artifact.abi() else {
                    if self.strict {
                        eyre::bail!("no `abi` field in {}", artifact.path().display());
                    }
                    let _ = sh_warn!("no `abi` field in {}", artifact.path().display());
                    return Ok(serde_json::Value::Null.to_string());
                };
                let json = if self.pretty {
                    serde_json::to_string_pretty(abi)?
                } else {
                    serde_json::to_string(abi)?
                };
                Ok(json)
            }
            AbiFormat::Sol => {
                let abi = artifact.json_abi()?;
                let name = artifact.contract_name().unwrap_or(&config.contract);
                Ok(abi.to_sol(name, None).trim_end().to_string())
            }
        }
    }
}
