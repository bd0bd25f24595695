//! Built-in device presets.

use std::fmt;
use std::str::FromStr;

use crate::error::HoverError;

use super::EnvironmentSnapshot;

/// A named device class with known answers to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Mouse-only desktop.
    Desktop,
    /// Touch-only phone.
    Phone,
    /// Touch tablet with a paired trackpad.
    HybridTablet,
    /// Old environment without pointer events or media queries.
    Legacy,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 4] = [
        Preset::Desktop,
        Preset::Phone,
        Preset::HybridTablet,
        Preset::Legacy,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Phone => "phone",
            Self::HybridTablet => "hybrid-tablet",
            Self::Legacy => "legacy",
        }
    }

    /// Short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Desktop => "Mouse-only desktop with no touch hardware",
            Self::Phone => "Touch-only phone with a coarse primary pointer",
            Self::HybridTablet => "Touch tablet with a secondary trackpad attached",
            Self::Legacy => "Legacy environment without pointer events or media queries",
        }
    }

    /// The environment this preset describes.
    pub fn snapshot(self) -> EnvironmentSnapshot {
        match self {
            Self::Desktop => EnvironmentSnapshot {
                hover: Some(true),
                fine_pointer_hover: Some(true),
                coarse_pointer: Some(false),
                any_hover: Some(true),
                pointer_events: Some(true),
                touch_start: Some(false),
                max_touch_points: Some(0),
                legacy_max_touch_points: None,
            },
            Self::Phone => EnvironmentSnapshot {
                hover: Some(false),
                fine_pointer_hover: Some(false),
                coarse_pointer: Some(true),
                any_hover: Some(false),
                pointer_events: Some(true),
                touch_start: Some(true),
                max_touch_points: Some(5),
                legacy_max_touch_points: None,
            },
            Self::HybridTablet => EnvironmentSnapshot {
                hover: Some(false),
                fine_pointer_hover: Some(false),
                coarse_pointer: Some(true),
                any_hover: Some(true),
                pointer_events: Some(true),
                touch_start: Some(true),
                max_touch_points: Some(5),
                legacy_max_touch_points: None,
            },
            Self::Legacy => EnvironmentSnapshot {
                pointer_events: Some(false),
                touch_start: Some(false),
                ..EnvironmentSnapshot::unsupported()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = HoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| HoverError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{PointerEnvironment, Signal};

    #[test]
    fn parses_every_preset_name() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Hybrid-Tablet".parse::<Preset>().unwrap(), Preset::HybridTablet);
    }

    #[test]
    fn unknown_preset_is_error() {
        let err = "watch".parse::<Preset>().unwrap_err();
        assert!(matches!(err, HoverError::UnknownPreset { .. }));
        assert!(err.to_string().contains("watch"));
    }

    #[test]
    fn hybrid_tablet_hovers_only_on_secondary_input() {
        let snap = Preset::HybridTablet.snapshot();
        assert_eq!(snap.any_hover(), Signal::Supported(true));
        assert_eq!(snap.hover(), Signal::Supported(false));
    }

    #[test]
    fn legacy_has_no_media_queries() {
        let snap = Preset::Legacy.snapshot();
        assert_eq!(snap.hover(), Signal::Unsupported);
        assert_eq!(snap.coarse_pointer(), Signal::Unsupported);
        assert_eq!(snap.pointer_events(), Signal::Supported(false));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Preset::Desktop.to_string(), "desktop");
    }
}
