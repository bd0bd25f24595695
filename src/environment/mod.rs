//! Environment capability providers.
//!
//! Probes never look at the host directly. They ask a [`PointerEnvironment`]
//! a fixed set of questions ("does hover work", "is the pointer coarse",
//! "is a touch-start capability registered", "how many touch points"), and
//! each answer is a tri-state [`Signal`] or [`TouchPoints`] so that an
//! unsupported query is distinguishable from a negative one.
//!
//! Providers shipped with the crate:
//!
//! - [`EnvironmentSnapshot`] - a plain description of a device, loadable
//!   from YAML/JSON
//! - [`EnvVarEnvironment`] - answers from `HOVER_DETECT_*` variables
//! - [`Preset`] - named snapshots for common device classes
//!
//! # Example
//!
//! ```
//! use hover_detect::environment::{EnvironmentSnapshot, PointerEnvironment, Signal};
//!
//! let env = EnvironmentSnapshot {
//!     hover: Some(true),
//!     ..Default::default()
//! };
//! assert_eq!(env.hover(), Signal::Supported(true));
//! assert_eq!(env.coarse_pointer(), Signal::Unsupported);
//! ```

pub mod env_vars;
pub mod presets;
pub mod snapshot;

pub use env_vars::EnvVarEnvironment;
pub use presets::Preset;
pub use snapshot::EnvironmentSnapshot;

use serde::{Deserialize, Serialize};

/// Answer to a single boolean environment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// The environment understood the query and answered it.
    Supported(bool),
    /// The environment cannot answer this query at all.
    Unsupported,
}

impl Signal {
    /// Resolve the signal, substituting `default` when unsupported.
    pub fn or_default(self, default: bool) -> bool {
        match self {
            Self::Supported(value) => value,
            Self::Unsupported => default,
        }
    }

    /// Whether the environment answered the query.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

impl From<Option<bool>> for Signal {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unsupported, Self::Supported)
    }
}

/// Answer to a maximum-touch-points query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPoints {
    /// The environment reported this many simultaneous touch points.
    Supported(u32),
    /// The environment exposes no touch-point count.
    Unsupported,
}

impl TouchPoints {
    /// Whether the count is evidence of touch input.
    ///
    /// Zero and unsupported both read as "no touch reported".
    pub fn reports_touch(self) -> bool {
        matches!(self, Self::Supported(n) if n > 0)
    }
}

impl From<Option<u32>> for TouchPoints {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Unsupported, Self::Supported)
    }
}

/// Source of the pointer and touch signals the probes read.
///
/// One method per environment query. Implementations must not fail; a
/// query the environment cannot evaluate is reported as `Unsupported`.
pub trait PointerEnvironment {
    /// `(hover: hover)` - the primary input can hover.
    fn hover(&self) -> Signal;

    /// `(pointer: fine) and (hover: hover)` - the primary pointer is precise
    /// and can hover.
    fn fine_pointer_hover(&self) -> Signal;

    /// `(pointer: coarse)` - the primary pointer is low precision.
    fn coarse_pointer(&self) -> Signal;

    /// `(any-hover: hover)` - at least one attached input can hover.
    fn any_hover(&self) -> Signal;

    /// Whether the environment supports pointer events at all.
    fn pointer_events(&self) -> Signal;

    /// Whether a touch-start capability is registered.
    fn touch_start(&self) -> Signal;

    /// Modern maximum simultaneous touch points.
    fn max_touch_points(&self) -> TouchPoints;

    /// Vendor-prefixed legacy maximum touch points.
    fn legacy_max_touch_points(&self) -> TouchPoints;
}

impl<T: PointerEnvironment + ?Sized> PointerEnvironment for &T {
    fn hover(&self) -> Signal {
        (**self).hover()
    }

    fn fine_pointer_hover(&self) -> Signal {
        (**self).fine_pointer_hover()
    }

    fn coarse_pointer(&self) -> Signal {
        (**self).coarse_pointer()
    }

    fn any_hover(&self) -> Signal {
        (**self).any_hover()
    }

    fn pointer_events(&self) -> Signal {
        (**self).pointer_events()
    }

    fn touch_start(&self) -> Signal {
        (**self).touch_start()
    }

    fn max_touch_points(&self) -> TouchPoints {
        (**self).max_touch_points()
    }

    fn legacy_max_touch_points(&self) -> TouchPoints {
        (**self).legacy_max_touch_points()
    }
}

impl<T: PointerEnvironment + ?Sized> PointerEnvironment for Box<T> {
    fn hover(&self) -> Signal {
        (**self).hover()
    }

    fn fine_pointer_hover(&self) -> Signal {
        (**self).fine_pointer_hover()
    }

    fn coarse_pointer(&self) -> Signal {
        (**self).coarse_pointer()
    }

    fn any_hover(&self) -> Signal {
        (**self).any_hover()
    }

    fn pointer_events(&self) -> Signal {
        (**self).pointer_events()
    }

    fn touch_start(&self) -> Signal {
        (**self).touch_start()
    }

    fn max_touch_points(&self) -> TouchPoints {
        (**self).max_touch_points()
    }

    fn legacy_max_touch_points(&self) -> TouchPoints {
        (**self).legacy_max_touch_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_or_default_uses_supported_value() {
        assert!(Signal::Supported(true).or_default(false));
        assert!(!Signal::Supported(false).or_default(true));
    }

    #[test]
    fn signal_or_default_falls_back_when_unsupported() {
        assert!(Signal::Unsupported.or_default(true));
        assert!(!Signal::Unsupported.or_default(false));
    }

    #[test]
    fn signal_from_option() {
        assert_eq!(Signal::from(Some(true)), Signal::Supported(true));
        assert_eq!(Signal::from(None), Signal::Unsupported);
        assert!(!Signal::Unsupported.is_supported());
    }

    #[test]
    fn touch_points_zero_is_not_touch() {
        assert!(!TouchPoints::Supported(0).reports_touch());
        assert!(!TouchPoints::Unsupported.reports_touch());
        assert!(TouchPoints::Supported(5).reports_touch());
    }

    #[test]
    fn boxed_provider_delegates() {
        let env: Box<dyn PointerEnvironment> = Box::new(EnvironmentSnapshot {
            any_hover: Some(true),
            max_touch_points: Some(10),
            ..Default::default()
        });
        assert_eq!(env.any_hover(), Signal::Supported(true));
        assert_eq!(env.max_touch_points(), TouchPoints::Supported(10));
        assert_eq!(env.hover(), Signal::Unsupported);
    }
}
