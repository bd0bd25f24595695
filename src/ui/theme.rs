//! Visual theme and styling.

use console::Style;

/// Terminal styles for probe and verdict output.
#[derive(Debug, Clone)]
pub struct HoverTheme {
    /// Style for passing probes and positive verdicts (green).
    pub success: Style,
    /// Style for errors (red bold).
    pub error: Style,
    /// Style for failing probes (red).
    pub failed: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for HoverTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            failed: Style::new().red(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            failed: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a probe outcome marker.
    pub fn format_outcome(&self, passed: bool) -> String {
        if passed {
            format!("{}", self.success.apply_to("✓ yes"))
        } else {
            format!("{}", self.failed.apply_to("✗ no "))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = HoverTheme::plain().format_success("hover supported");
        assert_eq!(msg, "✓ hover supported");
    }

    #[test]
    fn theme_formats_error() {
        let msg = HoverTheme::plain().format_error("bad file");
        assert_eq!(msg, "✗ bad file");
    }

    #[test]
    fn outcome_markers_are_equal_width() {
        let theme = HoverTheme::plain();
        assert_eq!(
            theme.format_outcome(true).chars().count(),
            theme.format_outcome(false).chars().count()
        );
    }

    #[test]
    fn default_theme_creates() {
        let _ = HoverTheme::default().header.apply_to("title");
    }
}
