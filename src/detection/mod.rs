//! Hover capability probes and the consensus vote.

pub mod probes;
pub mod runner;
pub mod types;

pub use probes::{
    any_input_can_hover, combined_heuristic, media_query_hover, media_query_pointer_hover,
    no_max_touch_points, no_touchstart_event, pointer_can_hover, ProbeFn, PROBES,
};
pub use runner::{all_results, consensus_of, HoverDetector, CONSENSUS_THRESHOLD};
pub use types::{ProbeId, ProbeResult, ResultSet, Verdict};
