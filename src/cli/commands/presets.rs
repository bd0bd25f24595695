//! Presets command implementation.
//!
//! The `hover-detect presets` command lists the built-in device presets
//! along with the verdict each one produces.

use crate::detection::HoverDetector;
use crate::environment::Preset;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The presets command implementation.
pub struct PresetsCommand;

impl Command for PresetsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Presets");

        for preset in Preset::ALL {
            let verdict = HoverDetector::new(preset.snapshot()).verdict();
            let line = format!(
                "  {:<14} {}  {}",
                preset.name(),
                ui.theme().format_outcome(verdict.hover),
                ui.theme().dim.apply_to(preset.description())
            );
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
