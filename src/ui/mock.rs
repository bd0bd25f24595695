//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::{HoverTheme, OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: HoverTheme,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    data: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with Normal output mode and a plain theme.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: HoverTheme::plain(),
            messages: Vec::new(),
            successes: Vec::new(),
            errors: Vec::new(),
            headers: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Get all messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all machine-readable output.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Check whether any captured line contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.errors)
            .chain(&self.headers)
            .chain(&self.data)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &HoverTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
        }
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }
}
