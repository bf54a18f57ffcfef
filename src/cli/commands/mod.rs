//! CLI commands and argument handling

pub mod info;

use std::path::PathBuf;

use clap::Subcommand;
use serde::Deserialize;

use crate::converter::{export_to_files, import_from_files, ConvertPaths};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert native Solo Mode data into editable gate/solo/deck files
    Export {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Rebuild native Solo Mode data from editable gate/solo/deck files
    Import {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Print a summary of a native Solo.json
    Info {
        /// Path to Solo.json or to the data root containing it
        #[arg(short, long)]
        source: PathBuf,
    },
}

/// The four conversion roots, from flags or a TOML config file.
#[derive(Debug, clap::Args)]
pub struct PathArgs {
    /// TOML file with a [paths] section providing any root not given as a flag
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of editable gate files
    #[arg(long)]
    gate: Option<PathBuf>,

    /// Directory of editable solo files
    #[arg(long)]
    solo: Option<PathBuf>,

    /// Directory of deck files
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Native data root (Solo.json, SoloDuel/, ClientData/)
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    paths: ConfigPaths,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPaths {
    gate: Option<PathBuf>,
    solo: Option<PathBuf>,
    deck: Option<PathBuf>,
    data: Option<PathBuf>,
}

impl PathArgs {
    /// Resolve the four roots. Flags win over the config file; every root
    /// must come from one of the two.
    fn resolve(&self) -> anyhow::Result<ConvertPaths> {
        let config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str::<ConfigFile>(&content)?
            }
            None => ConfigFile::default(),
        };

        let pick = |flag: &Option<PathBuf>, configured: Option<PathBuf>, name: &str| {
            flag.clone()
                .or(configured)
                .ok_or_else(|| anyhow::anyhow!("missing path: pass --{name} or set paths.{name}"))
        };

        Ok(ConvertPaths {
            gate_path: pick(&self.gate, config.paths.gate, "gate")?,
            solo_path: pick(&self.solo, config.paths.solo, "solo")?,
            deck_path: pick(&self.deck, config.paths.deck, "deck")?,
            data_path: pick(&self.data, config.paths.data, "data")?,
        })
    }
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Export { paths } => {
                export_to_files(&paths.resolve()?)?;
                println!("Export complete");
                Ok(())
            }
            Commands::Import { paths } => {
                import_from_files(&paths.resolve()?)?;
                println!("Import complete");
                Ok(())
            }
            Commands::Info { source } => info::execute(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("paths.toml");
        std::fs::write(
            &config,
            "[paths]\ngate = \"cfg/gates\"\nsolo = \"cfg/solos\"\ndeck = \"cfg/decks\"\ndata = \"cfg/data\"\n",
        )
        .unwrap();

        let args = PathArgs {
            config: Some(config),
            gate: Some(PathBuf::from("flag/gates")),
            solo: None,
            deck: None,
            data: None,
        };
        let paths = args.resolve().unwrap();
        assert_eq!(paths.gate_path, PathBuf::from("flag/gates"));
        assert_eq!(paths.solo_path, PathBuf::from("cfg/solos"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let args = PathArgs {
            config: None,
            gate: Some(PathBuf::from("g")),
            solo: Some(PathBuf::from("s")),
            deck: None,
            data: Some(PathBuf::from("d")),
        };
        assert!(args.resolve().is_err());
    }
}
