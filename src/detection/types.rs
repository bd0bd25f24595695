//! Probe identifiers, result sets and verdicts.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Identifies one of the seven hover probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProbeId {
    MediaQueryHover,
    MediaQueryPointerHover,
    NoTouchstartEvent,
    NoMaxTouchPoints,
    PointerCanHover,
    AnyInputCanHover,
    CombinedHeuristic,
}

impl ProbeId {
    /// All probes in declaration order.
    pub const ALL: [ProbeId; 7] = [
        ProbeId::MediaQueryHover,
        ProbeId::MediaQueryPointerHover,
        ProbeId::NoTouchstartEvent,
        ProbeId::NoMaxTouchPoints,
        ProbeId::PointerCanHover,
        ProbeId::AnyInputCanHover,
        ProbeId::CombinedHeuristic,
    ];

    /// Stable machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            Self::MediaQueryHover => "media-query-hover",
            Self::MediaQueryPointerHover => "media-query-pointer-hover",
            Self::NoTouchstartEvent => "no-touchstart-event",
            Self::NoMaxTouchPoints => "no-max-touch-points",
            Self::PointerCanHover => "pointer-can-hover",
            Self::AnyInputCanHover => "any-input-can-hover",
            Self::CombinedHeuristic => "combined-heuristic",
        }
    }

    /// Human-readable name used as the result set key.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MediaQueryHover => "CSS Media Query (hover: hover)",
            Self::MediaQueryPointerHover => "CSS Media Query (pointer: fine)",
            Self::NoTouchstartEvent => "No touchstart event",
            Self::NoMaxTouchPoints => "No maxTouchPoints",
            Self::PointerCanHover => "Pointer not coarse",
            Self::AnyInputCanHover => "CSS Media Query (any-hover)",
            Self::CombinedHeuristic => "Combined heuristic",
        }
    }

    /// What the probe checks.
    pub fn description(self) -> &'static str {
        match self {
            Self::MediaQueryHover => "Primary input reports a hover state",
            Self::MediaQueryPointerHover => "Primary pointer is fine and can hover",
            Self::NoTouchstartEvent => "No touch-start capability and no legacy touch points",
            Self::NoMaxTouchPoints => "Device reports zero maximum touch points",
            Self::PointerCanHover => "Primary pointer is not coarse (true without pointer events)",
            Self::AnyInputCanHover => "At least one attached input can hover",
            Self::CombinedHeuristic => "Both touch-absence checks hold",
        }
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub probe: ProbeId,
    pub passed: bool,
}

/// Outcome of every probe at one point in time, in declaration order.
///
/// Serializes as a JSON object of display name to boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    results: Vec<ProbeResult>,
}

impl ResultSet {
    /// Build from already-evaluated results.
    pub fn new(results: Vec<ProbeResult>) -> Self {
        Self { results }
    }

    /// Build a synthetic set with one value per probe in declaration order.
    pub fn from_values(values: [bool; 7]) -> Self {
        Self::new(
            ProbeId::ALL
                .into_iter()
                .zip(values)
                .map(|(probe, passed)| ProbeResult { probe, passed })
                .collect(),
        )
    }

    /// Look up a single probe's outcome.
    pub fn get(&self, probe: ProbeId) -> Option<bool> {
        self.results
            .iter()
            .find(|r| r.probe == probe)
            .map(|r| r.passed)
    }

    /// Number of probes that returned `true`.
    pub fn true_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate results in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(result.probe.display_name(), &result.passed)?;
        }
        map.end()
    }
}

/// Consensus decision with the counts that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether hover-triggered UI should be enabled.
    pub hover: bool,
    /// Probes that returned `true`.
    pub true_count: usize,
    /// Probes evaluated.
    pub total: usize,
    /// Minimum `true_count` for a positive verdict.
    pub threshold: usize,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.hover {
            "hover supported"
        } else {
            "hover not supported"
        };
        write!(
            f,
            "{} ({}/{} probes agree, threshold {})",
            label, self.true_count, self.total, self.threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_keys_are_unique() {
        let mut keys: Vec<_> = ProbeId::ALL.iter().map(|p| p.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(
            ProbeId::MediaQueryHover.to_string(),
            "CSS Media Query (hover: hover)"
        );
        assert_eq!(ProbeId::PointerCanHover.to_string(), "Pointer not coarse");
    }

    #[test]
    fn from_values_preserves_order() {
        let set = ResultSet::from_values([true, false, false, false, false, false, true]);
        let order: Vec<_> = set.iter().map(|r| r.probe).collect();
        assert_eq!(order, ProbeId::ALL.to_vec());
        assert_eq!(set.get(ProbeId::MediaQueryHover), Some(true));
        assert_eq!(set.get(ProbeId::CombinedHeuristic), Some(true));
        assert_eq!(set.true_count(), 2);
    }

    #[test]
    fn get_missing_probe_is_none() {
        let set = ResultSet::new(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.get(ProbeId::AnyInputCanHover), None);
    }

    #[test]
    fn result_set_serializes_in_declaration_order() {
        let set = ResultSet::from_values([true; 7]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with(r#"{"CSS Media Query (hover: hover)":true"#));
        assert!(json.ends_with(r#""Combined heuristic":true}"#));
    }

    #[test]
    fn verdict_display_includes_counts() {
        let verdict = Verdict {
            hover: false,
            true_count: 3,
            total: 7,
            threshold: 4,
        };
        assert_eq!(
            verdict.to_string(),
            "hover not supported (3/7 probes agree, threshold 4)"
        );
    }
}
