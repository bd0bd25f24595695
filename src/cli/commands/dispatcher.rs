//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ConsensusArgs};
use crate::config::EnvironmentSource;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit code (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: EnvironmentSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading the given environment source.
    pub fn new(source: EnvironmentSource) -> Self {
        Self { source }
    }

    /// Get the environment source.
    pub fn source(&self) -> &EnvironmentSource {
        &self.source
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Results(args)) => {
                let cmd = super::results::ResultsCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Consensus(args)) => {
                let cmd =
                    super::consensus::ConsensusCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Probes) => super::probes::ProbesCommand.execute(ui),
            Some(Commands::Presets) => super::presets::PresetsCommand.execute(ui),
            None => {
                let cmd = super::consensus::ConsensusCommand::new(
                    self.source.clone(),
                    ConsensusArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Preset;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_keeps_high_exit_codes() {
        // Codes above 255 cannot be constructed, so nothing wraps to 0.
        let result = CommandResult::failure(255);
        assert_eq!(result.exit_code, u8::MAX);
    }

    #[test]
    fn dispatcher_keeps_source() {
        let dispatcher = CommandDispatcher::new(EnvironmentSource::Preset(Preset::Legacy));
        assert_eq!(
            dispatcher.source(),
            &EnvironmentSource::Preset(Preset::Legacy)
        );
    }

    #[test]
    fn no_subcommand_runs_consensus() {
        let cli = Cli::parse_from(["hover-detect"]);
        let dispatcher = CommandDispatcher::new(EnvironmentSource::Preset(Preset::Desktop));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_output("hover supported"));
    }

    #[test]
    fn dispatches_probes_listing() {
        let cli = Cli::parse_from(["hover-detect", "probes"]);
        let dispatcher = CommandDispatcher::new(EnvironmentSource::default());
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(ui.has_output("combined-heuristic"));
    }
}
