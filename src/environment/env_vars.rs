//! Environment-variable backed provider.
//!
//! Lets a host that knows its input hardware (a kiosk launcher, a test
//! harness, a server-side renderer relaying client hints) describe it via
//! `HOVER_DETECT_*` variables. Unset variables are unsupported queries.

use super::{EnvironmentSnapshot, PointerEnvironment, Signal, TouchPoints};

/// `(hover: hover)`.
pub const HOVER_VAR: &str = "HOVER_DETECT_HOVER";
/// `(pointer: fine) and (hover: hover)`.
pub const FINE_POINTER_HOVER_VAR: &str = "HOVER_DETECT_FINE_POINTER_HOVER";
/// `(pointer: coarse)`.
pub const COARSE_POINTER_VAR: &str = "HOVER_DETECT_COARSE_POINTER";
/// `(any-hover: hover)`.
pub const ANY_HOVER_VAR: &str = "HOVER_DETECT_ANY_HOVER";
/// Pointer event support.
pub const POINTER_EVENTS_VAR: &str = "HOVER_DETECT_POINTER_EVENTS";
/// Touch-start capability.
pub const TOUCH_START_VAR: &str = "HOVER_DETECT_TOUCH_START";
/// Maximum touch points.
pub const MAX_TOUCH_POINTS_VAR: &str = "HOVER_DETECT_MAX_TOUCH_POINTS";
/// Legacy maximum touch points.
pub const LEGACY_MAX_TOUCH_POINTS_VAR: &str = "HOVER_DETECT_LEGACY_MAX_TOUCH_POINTS";

/// All variables read by [`EnvVarEnvironment`], in query order.
pub const ALL_VARS: &[&str] = &[
    HOVER_VAR,
    FINE_POINTER_HOVER_VAR,
    COARSE_POINTER_VAR,
    ANY_HOVER_VAR,
    POINTER_EVENTS_VAR,
    TOUCH_START_VAR,
    MAX_TOUCH_POINTS_VAR,
    LEGACY_MAX_TOUCH_POINTS_VAR,
];

/// Provider that answers queries from environment variables.
///
/// Values are read once at construction so repeated queries are stable.
///
/// # Example
///
/// ```
/// use hover_detect::environment::{EnvVarEnvironment, PointerEnvironment, Signal};
///
/// let env = EnvVarEnvironment::from_env_fn(|key| match key {
///     "HOVER_DETECT_HOVER" => Ok("yes".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert_eq!(env.hover(), Signal::Supported(true));
/// assert_eq!(env.any_hover(), Signal::Unsupported);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarEnvironment {
    snapshot: EnvironmentSnapshot,
    configured: usize,
}

impl EnvVarEnvironment {
    /// Read the process environment.
    pub fn from_process_env() -> Self {
        Self::from_env_fn(|key| std::env::var(key))
    }

    /// Read through a custom lookup function (for testing).
    ///
    /// Each variable is looked up and parsed exactly once; unparseable
    /// values are logged here and treated as unsupported.
    pub fn from_env_fn<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let mut configured = 0;
        let mut lookup = |var: &str| {
            let value = env_fn(var).ok();
            if value.is_some() {
                configured += 1;
            }
            value
        };

        let snapshot = EnvironmentSnapshot {
            hover: lookup(HOVER_VAR).and_then(|raw| parse_flag(HOVER_VAR, &raw)),
            fine_pointer_hover: lookup(FINE_POINTER_HOVER_VAR)
                .and_then(|raw| parse_flag(FINE_POINTER_HOVER_VAR, &raw)),
            coarse_pointer: lookup(COARSE_POINTER_VAR)
                .and_then(|raw| parse_flag(COARSE_POINTER_VAR, &raw)),
            any_hover: lookup(ANY_HOVER_VAR).and_then(|raw| parse_flag(ANY_HOVER_VAR, &raw)),
            pointer_events: lookup(POINTER_EVENTS_VAR)
                .and_then(|raw| parse_flag(POINTER_EVENTS_VAR, &raw)),
            touch_start: lookup(TOUCH_START_VAR).and_then(|raw| parse_flag(TOUCH_START_VAR, &raw)),
            max_touch_points: lookup(MAX_TOUCH_POINTS_VAR)
                .and_then(|raw| parse_count(MAX_TOUCH_POINTS_VAR, &raw)),
            legacy_max_touch_points: lookup(LEGACY_MAX_TOUCH_POINTS_VAR)
                .and_then(|raw| parse_count(LEGACY_MAX_TOUCH_POINTS_VAR, &raw)),
        };

        Self {
            snapshot,
            configured,
        }
    }

    /// Number of variables that were set, parseable or not.
    pub fn configured_count(&self) -> usize {
        self.configured
    }
}

/// Parse a boolean flag value, warning when it is not one.
fn parse_flag(var: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring {}={:?}: expected a boolean", var, raw);
            None
        }
    }
}

/// Parse a touch point count, warning when it is not one.
fn parse_count(var: &str, raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: expected a touch point count", var, raw);
            None
        }
    }
}

impl PointerEnvironment for EnvVarEnvironment {
    fn hover(&self) -> Signal {
        self.snapshot.hover()
    }

    fn fine_pointer_hover(&self) -> Signal {
        self.snapshot.fine_pointer_hover()
    }

    fn coarse_pointer(&self) -> Signal {
        self.snapshot.coarse_pointer()
    }

    fn any_hover(&self) -> Signal {
        self.snapshot.any_hover()
    }

    fn pointer_events(&self) -> Signal {
        self.snapshot.pointer_events()
    }

    fn touch_start(&self) -> Signal {
        self.snapshot.touch_start()
    }

    fn max_touch_points(&self) -> TouchPoints {
        self.snapshot.max_touch_points()
    }

    fn legacy_max_touch_points(&self) -> TouchPoints {
        self.snapshot.legacy_max_touch_points()
    }
}
