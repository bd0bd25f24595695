//! Choosing which provider to evaluate.

use std::fmt;
use std::path::PathBuf;

use crate::environment::{EnvVarEnvironment, PointerEnvironment, Preset};
use crate::error::Result;

use super::loader::load_snapshot_file;

/// Where the environment description comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EnvironmentSource {
    /// A YAML/JSON snapshot file.
    File(PathBuf),
    /// A built-in preset.
    Preset(Preset),
    /// `HOVER_DETECT_*` process environment variables.
    #[default]
    EnvVars,
}

impl fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Preset(preset) => write!(f, "preset {}", preset),
            Self::EnvVars => write!(f, "environment variables"),
        }
    }
}

impl EnvironmentSource {
    /// Build the provider for this source.
    ///
    /// # Errors
    ///
    /// Only file sources can fail, with `ConfigNotFound` or
    /// `ConfigParseError`.
    pub fn resolve(&self) -> Result<Box<dyn PointerEnvironment>> {
        tracing::debug!("Resolving environment from {}", self);
        match self {
            Self::File(path) => Ok(Box::new(load_snapshot_file(path)?)),
            Self::Preset(preset) => Ok(Box::new(preset.snapshot())),
            Self::EnvVars => {
                let env = EnvVarEnvironment::from_process_env();
                if env.configured_count() == 0 {
                    tracing::debug!("No HOVER_DETECT_* variables set; every query is unsupported");
                }
                Ok(Box::new(env))
            }
        }
    }
}
