//! Results command implementation.
//!
//! The `hover-detect results` command shows every probe outcome.

use crate::cli::args::ResultsArgs;
use crate::config::EnvironmentSource;
use crate::detection::HoverDetector;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The results command implementation.
pub struct ResultsCommand {
    source: EnvironmentSource,
    args: ResultsArgs,
}

impl ResultsCommand {
    /// Create a new results command.
    pub fn new(source: EnvironmentSource, args: ResultsArgs) -> Self {
        Self { source, args }
    }
}

impl Command for ResultsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detector = HoverDetector::new(self.source.resolve()?);
        let results = detector.all_results();

        if self.args.json {
            let json = serde_json::to_string_pretty(&results).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Probe results ({})", self.source));

        let width = results
            .iter()
            .map(|r| r.probe.display_name().len())
            .max()
            .unwrap_or(0);
        for result in results.iter() {
            let line = format!(
                "  {:<width$}  {}",
                result.probe.display_name(),
                ui.theme().format_outcome(result.passed),
                width = width
            );
            ui.message(&line);
        }

        let summary = format!(
            "{}/{} probes report hover",
            results.true_count(),
            results.len()
        );
        let summary = format!("  {}", ui.theme().dim.apply_to(summary));
        ui.message("");
        ui.message(&summary);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Preset;
    use crate::ui::{MockUI, OutputMode};

    fn run(preset: Preset, json: bool, mode: OutputMode) -> MockUI {
        let cmd = ResultsCommand::new(EnvironmentSource::Preset(preset), ResultsArgs { json });
        let mut ui = MockUI::with_mode(mode);
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn lists_every_probe() {
        let ui = run(Preset::Desktop, false, OutputMode::Normal);
        let probe_lines = ui
            .messages()
            .iter()
            .filter(|m| m.contains('✓') || m.contains('✗'))
            .count();
        assert_eq!(probe_lines, 7);
        assert!(ui.has_output("7/7 probes report hover"));
    }

    #[test]
    fn header_names_source() {
        let ui = run(Preset::Phone, false, OutputMode::Normal);
        assert_eq!(ui.headers(), ["Probe results (preset phone)"]);
        assert!(ui.has_output("0/7 probes report hover"));
    }

    #[test]
    fn quiet_mode_skips_header() {
        let ui = run(Preset::Phone, false, OutputMode::Quiet);
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn json_output_is_ordered_object() {
        let ui = run(Preset::HybridTablet, true, OutputMode::Normal);
        assert_eq!(ui.data().len(), 1);

        let value: serde_json::Value = serde_json::from_str(&ui.data()[0]).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(object["CSS Media Query (any-hover)"], true);
        assert_eq!(object["CSS Media Query (hover: hover)"], false);
    }

    #[test]
    fn missing_env_file_is_error() {
        let cmd = ResultsCommand::new(
            EnvironmentSource::File("/nonexistent/device.yml".into()),
            ResultsArgs::default(),
        );
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).is_err());
    }
}
