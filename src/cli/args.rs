//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EnvironmentSource;
use crate::environment::Preset;
use crate::error::Result;

/// hover-detect - Decide whether a device's primary input can hover.
#[derive(Debug, Parser)]
#[command(name = "hover-detect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read the environment from a YAML or JSON snapshot file
    #[arg(long, global = true, value_name = "PATH", conflicts_with_all = ["preset", "from_env"])]
    pub env_file: Option<PathBuf>,

    /// Use a built-in device preset (desktop, phone, hybrid-tablet, legacy)
    #[arg(long, global = true, value_name = "NAME", conflicts_with = "from_env")]
    pub preset: Option<String>,

    /// Read the environment from HOVER_DETECT_* variables (default)
    #[arg(long, global = true)]
    pub from_env: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Work out which environment the flags select.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPreset` for an unrecognized `--preset`.
    pub fn environment_source(&self) -> Result<EnvironmentSource> {
        if let Some(path) = &self.env_file {
            return Ok(EnvironmentSource::File(path.clone()));
        }
        if let Some(name) = &self.preset {
            return Ok(EnvironmentSource::Preset(name.parse::<Preset>()?));
        }
        Ok(EnvironmentSource::EnvVars)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every probe result
    Results(ResultsArgs),

    /// Show the consensus verdict (default if no command specified)
    Consensus(ConsensusArgs),

    /// List the probes and what they check
    Probes,

    /// List the built-in device presets
    Presets,
}

/// Arguments for the `results` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResultsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `consensus` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConsensusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when hover is not supported
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HoverError;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_results_json() {
        let cli = Cli::parse_from(["hover-detect", "results", "--json"]);
        match cli.command {
            Some(Commands::Results(args)) => assert!(args.json),
            other => panic!("Expected Results command, got {:?}", other),
        }
    }

    #[test]
    fn parses_consensus_check() {
        let cli = Cli::parse_from(["hover-detect", "consensus", "--check"]);
        match cli.command {
            Some(Commands::Consensus(args)) => {
                assert!(args.check);
                assert!(!args.json);
            }
            other => panic!("Expected Consensus command, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::parse_from(["hover-detect"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn default_source_is_env_vars() {
        let cli = Cli::parse_from(["hover-detect", "results"]);
        assert_eq!(
            cli.environment_source().unwrap(),
            EnvironmentSource::EnvVars
        );
    }

    #[test]
    fn preset_flag_selects_preset() {
        let cli = Cli::parse_from(["hover-detect", "--preset", "phone", "consensus"]);
        assert_eq!(
            cli.environment_source().unwrap(),
            EnvironmentSource::Preset(Preset::Phone)
        );
    }

    #[test]
    fn global_flag_after_subcommand() {
        let cli = Cli::parse_from(["hover-detect", "results", "--env-file", "device.yml"]);
        assert_eq!(
            cli.environment_source().unwrap(),
            EnvironmentSource::File(PathBuf::from("device.yml"))
        );
    }

    #[test]
    fn unknown_preset_is_error() {
        let cli = Cli::parse_from(["hover-detect", "--preset", "toaster"]);
        assert!(matches!(
            cli.environment_source(),
            Err(HoverError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn env_file_conflicts_with_preset() {
        let result = Cli::try_parse_from([
            "hover-detect",
            "--env-file",
            "device.yml",
            "--preset",
            "desktop",
        ]);
        assert!(result.is_err());
    }
}
