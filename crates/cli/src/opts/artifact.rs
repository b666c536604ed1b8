use clap::Parser;
use mintkit_common::ArtifactLayout;
use mintkit_config::figment::{
    self, Metadata, Profile,
    value::{Dict, Map},
};
use std::path::{Path, PathBuf};

/// Options locating the contract artifact.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Artifact options")]
pub struct ArtifactOpts {
    /// Path to the artifact file, overriding the path derived from the contract name.
    #[arg(long, short, value_name = "PATH")]
    pub artifact: Option<PathBuf>,

    /// The artifact directory convention of the project.
    #[arg(long, value_name = "LAYOUT")]
    pub layout: Option<ArtifactLayout>,

    /// The project's root path.
    ///
    /// By default root of the enclosing hardhat or foundry project, or the working directory.
    #[arg(long, value_hint = clap::ValueHint::DirPath, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

impl figment::Provider for ArtifactOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("ArtifactOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}

impl ArtifactOpts {
    pub fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(artifact) = &self.artifact {
            // flags are relative to the working directory, not the project root
            let artifact = absolute(artifact);
            dict.insert("artifact".into(), artifact.display().to_string().into());
        }
        if let Some(layout) = self.layout {
            dict.insert("layout".into(), layout.to_string().into());
        }
        dict
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
}
