//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled text to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use hover_detect::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("hover supported");
//! assert!(ui.successes().contains(&"hover supported".to_string()));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, HoverTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Access the styles in use.
    fn theme(&self) -> &HoverTheme;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header.
    fn show_header(&mut self, title: &str);

    /// Emit machine-readable output. Shown in every mode.
    fn data(&mut self, text: &str);
}
