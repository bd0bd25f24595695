//! Consensus command implementation.
//!
//! The `hover-detect consensus` command prints the majority verdict.

use crate::cli::args::ConsensusArgs;
use crate::config::EnvironmentSource;
use crate::detection::HoverDetector;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for `--check` when hover is not supported.
pub const NO_HOVER_EXIT_CODE: u8 = 1;

/// The consensus command implementation.
pub struct ConsensusCommand {
    source: EnvironmentSource,
    args: ConsensusArgs,
}

impl ConsensusCommand {
    /// Create a new consensus command.
    pub fn new(source: EnvironmentSource, args: ConsensusArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ConsensusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector = HoverDetector::new(self.source.resolve()?);
        let verdict = detector.verdict();

        if self.args.json {
            let json = serde_json::to_string_pretty(&verdict).map_err(anyhow::Error::from)?;
            ui.data(&json);
        } else if verdict.hover {
            ui.success(&verdict.to_string());
        } else {
            let line = format!("{}", ui.theme().failed.apply_to(format!("✗ {}", verdict)));
            ui.message(&line);
        }

        if self.args.check && !verdict.hover {
            return Ok(CommandResult::failure(NO_HOVER_EXIT_CODE));
        }
        Ok(CommandResult::success())
    }
}
