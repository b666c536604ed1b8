use clap::Parser;
use eyre::Result;
use mintkit_cli::{
    opts::{ArtifactOpts, RpcOpts},
    utils,
};
use mintkit_config::figment::Figment;

/// CLI arguments for `mintkit config`.
#[derive(Clone, Debug, Parser)]
pub struct ConfigArgs {
    /// Print the config as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub artifact: ArtifactOpts,

    #[command(flatten)]
    pub rpc: RpcOpts,
}

impl ConfigArgs {
    pub fn run(self) -> Result<()> {
        let opts = Figment::from(self.artifact.clone()).merge(self.rpc.clone());
        let config = utils::load_config_with(self.artifact.root.as_deref(), opts)?;

        let s = if self.json {
            serde_json::to_string_pretty(&config)?
        } else {
            config.to_string_pretty()?
        };

        sh_println!("{}", s.trim_end())?;
        Ok(())
    }
}
