//! Probe aggregation and the consensus vote.

use crate::environment::PointerEnvironment;

use super::probes::PROBES;
use super::types::{ProbeResult, ResultSet, Verdict};

/// Minimum number of `true` probes for a positive verdict.
///
/// Four of seven, i.e. strictly more than half. Three of the seven probes
/// read overlapping touch signals, so the effective weight of touch
/// absence is higher than one vote each.
pub const CONSENSUS_THRESHOLD: usize = 4;

/// Evaluate every probe against an environment, in declaration order.
pub fn all_results(env: &dyn PointerEnvironment) -> ResultSet {
    let results = PROBES
        .iter()
        .map(|(probe, f)| {
            let passed = f(env);
            tracing::debug!("Probe '{}' -> {}", probe.key(), passed);
            ProbeResult {
                probe: *probe,
                passed,
            }
        })
        .collect();
    ResultSet::new(results)
}

/// Apply the majority vote to a result set.
pub fn consensus_of(results: &ResultSet) -> Verdict {
    let true_count = results.true_count();
    Verdict {
        hover: true_count >= CONSENSUS_THRESHOLD,
        true_count,
        total: results.len(),
        threshold: CONSENSUS_THRESHOLD,
    }
}

/// Evaluates hover probes against a capability provider.
///
/// Holds no state besides the provider; every call re-reads it.
///
/// # Example
///
/// ```
/// use hover_detect::detection::HoverDetector;
/// use hover_detect::environment::Preset;
///
/// let detector = HoverDetector::new(Preset::Desktop.snapshot());
/// assert_eq!(detector.all_results().len(), 7);
/// assert!(detector.consensus());
/// ```
#[derive(Debug, Clone)]
pub struct HoverDetector<E> {
    env: E,
}

impl<E: PointerEnvironment> HoverDetector<E> {
    /// Create a detector reading from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The underlying provider.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Evaluate all seven probes.
    pub fn all_results(&self) -> ResultSet {
        all_results(&self.env)
    }

    /// Evaluate all probes and vote, keeping the counts.
    pub fn verdict(&self) -> Verdict {
        let verdict = consensus_of(&self.all_results());
        tracing::debug!("Consensus: {}", verdict);
        verdict
    }

    /// Whether a majority of probes indicate hover support.
    pub fn consensus(&self) -> bool {
        self.verdict().hover
    }
}
