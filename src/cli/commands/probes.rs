//! Probes command implementation.
//!
//! The `hover-detect probes` command lists the probes in vote order.

use crate::detection::{ProbeId, CONSENSUS_THRESHOLD};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probes command implementation.
pub struct ProbesCommand;

impl Command for ProbesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Probes");

        for (index, probe) in ProbeId::ALL.iter().enumerate() {
            let title = format!(
                "  {}. {} {}",
                index + 1,
                ui.theme().highlight.apply_to(probe.key()),
                ui.theme().dim.apply_to(format!("({})", probe.display_name()))
            );
            let description = format!("     {}", probe.description());
            ui.message(&title);
            ui.message(&description);
        }

        ui.message("");
        ui.message(&format!(
            "  Consensus: hover when at least {} of {} probes agree",
            CONSENSUS_THRESHOLD,
            ProbeId::ALL.len()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_all_probes_in_order() {
        let mut ui = MockUI::new();
        ProbesCommand.execute(&mut ui).unwrap();

        let first = ui
            .messages()
            .iter()
            .position(|m| m.contains("media-query-hover"))
            .unwrap();
        let last = ui
            .messages()
            .iter()
            .position(|m| m.contains("combined-heuristic"))
            .unwrap();
        assert!(first < last);
        assert!(ui.has_output("7. combined-heuristic"));
    }

    #[test]
    fn states_threshold() {
        let mut ui = MockUI::new();
        ProbesCommand.execute(&mut ui).unwrap();
        assert!(ui.has_output("at least 4 of 7"));
    }
}
