//! hover-detect - Decide whether a device's primary input can hover.
//!
//! Hover-triggered UI (tooltips, dropdown previews) only makes sense where
//! the pointer can be sensed without a click or tap. No single environment
//! signal answers that reliably across legacy browsers, hybrid devices and
//! devices that misreport touch points, so this crate evaluates seven
//! independent probes and offers a majority vote over them.
//!
//! # Modules
//!
//! - [`detection`] - The seven probes, result sets and the consensus vote
//! - [`environment`] - Capability providers the probes read from
//! - [`config`] - Loading environment snapshots from files
//! - [`cli`] - Command-line interface
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use hover_detect::detection::{HoverDetector, ProbeId};
//! use hover_detect::environment::Preset;
//!
//! let detector = HoverDetector::new(Preset::HybridTablet.snapshot());
//! let results = detector.all_results();
//! assert_eq!(results.get(ProbeId::AnyInputCanHover), Some(true));
//! assert!(!detector.consensus());
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod ui;

pub use detection::{HoverDetector, ResultSet, Verdict};
pub use environment::PointerEnvironment;
pub use error::{HoverError, Result};
