//! Command-line interface for hover-detect.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConsensusArgs, ResultsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
