//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands them the environment
//! source selected by the global flags.

pub mod consensus;
pub mod dispatcher;
pub mod presets;
pub mod probes;
pub mod results;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
