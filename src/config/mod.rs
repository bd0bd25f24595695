//! Environment descriptions for the CLI.
//!
//! - File loading in [`loader`]
//! - Source selection in [`source`]
//!
//! # Example
//!
//! ```
//! use hover_detect::config::parse_snapshot;
//! use std::path::Path;
//!
//! let snap = parse_snapshot("hover: true\ncoarse_pointer: false\n", Path::new("device.yml")).unwrap();
//! assert_eq!(snap.hover, Some(true));
//! ```

pub mod loader;
pub mod source;

pub use loader::{load_snapshot_file, parse_snapshot};
pub use source::EnvironmentSource;
