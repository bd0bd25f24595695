//! Static device description.

use serde::{Deserialize, Serialize};

use super::{PointerEnvironment, Signal, TouchPoints};

/// A fixed set of answers to every environment query.
///
/// Each field is optional; a missing field means the environment does not
/// support that query. Snapshots are what config files deserialize into:
///
/// ```yaml
/// hover: true
/// fine_pointer_hover: true
/// coarse_pointer: false
/// any_hover: true
/// pointer_events: true
/// touch_start: false
/// max_touch_points: 0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentSnapshot {
    /// `(hover: hover)` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<bool>,

    /// `(pointer: fine) and (hover: hover)` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_pointer_hover: Option<bool>,

    /// `(pointer: coarse)` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coarse_pointer: Option<bool>,

    /// `(any-hover: hover)` matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_hover: Option<bool>,

    /// Pointer events are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_events: Option<bool>,

    /// A touch-start capability is registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_start: Option<bool>,

    /// Reported maximum touch points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_touch_points: Option<u32>,

    /// Reported legacy (vendor-prefixed) maximum touch points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_max_touch_points: Option<u32>,
}

impl EnvironmentSnapshot {
    /// A snapshot where every query is unsupported.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// Capture the current answers of any provider.
    pub fn capture(env: &dyn PointerEnvironment) -> Self {
        Self {
            hover: signal_value(env.hover()),
            fine_pointer_hover: signal_value(env.fine_pointer_hover()),
            coarse_pointer: signal_value(env.coarse_pointer()),
            any_hover: signal_value(env.any_hover()),
            pointer_events: signal_value(env.pointer_events()),
            touch_start: signal_value(env.touch_start()),
            max_touch_points: touch_value(env.max_touch_points()),
            legacy_max_touch_points: touch_value(env.legacy_max_touch_points()),
        }
    }
}

fn signal_value(signal: Signal) -> Option<bool> {
    match signal {
        Signal::Supported(v) => Some(v),
        Signal::Unsupported => None,
    }
}

fn touch_value(points: TouchPoints) -> Option<u32> {
    match points {
        TouchPoints::Supported(n) => Some(n),
        TouchPoints::Unsupported => None,
    }
}

impl PointerEnvironment for EnvironmentSnapshot {
    fn hover(&self) -> Signal {
        self.hover.into()
    }

    fn fine_pointer_hover(&self) -> Signal {
        self.fine_pointer_hover.into()
    }

    fn coarse_pointer(&self) -> Signal {
        self.coarse_pointer.into()
    }

    fn any_hover(&self) -> Signal {
        self.any_hover.into()
    }

    fn pointer_events(&self) -> Signal {
        self.pointer_events.into()
    }

    fn touch_start(&self) -> Signal {
        self.touch_start.into()
    }

    fn max_touch_points(&self) -> TouchPoints {
        self.max_touch_points.into()
    }

    fn legacy_max_touch_points(&self) -> TouchPoints {
        self.legacy_max_touch_points.into()
    }
}
