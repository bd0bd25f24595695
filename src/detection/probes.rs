//! The seven hover probes.
//!
//! Each probe is a pure function of a [`PointerEnvironment`]. When the
//! environment cannot answer a query the probe falls back to a fixed
//! default instead of failing:
//!
//! | Probe | Unsupported query reads as |
//! |---|---|
//! | media-query probes | no match (`false`) |
//! | touch-start / touch-point counts | no touch (`true` for the absence probes) |
//! | pointer events missing | `pointer_can_hover` is `true` |

use crate::environment::PointerEnvironment;

use super::types::ProbeId;

/// A probe function.
pub type ProbeFn = fn(&dyn PointerEnvironment) -> bool;

/// Ordered registry of every probe.
pub const PROBES: [(ProbeId, ProbeFn); 7] = [
    (ProbeId::MediaQueryHover, media_query_hover),
    (ProbeId::MediaQueryPointerHover, media_query_pointer_hover),
    (ProbeId::NoTouchstartEvent, no_touchstart_event),
    (ProbeId::NoMaxTouchPoints, no_max_touch_points),
    (ProbeId::PointerCanHover, pointer_can_hover),
    (ProbeId::AnyInputCanHover, any_input_can_hover),
    (ProbeId::CombinedHeuristic, combined_heuristic),
];

/// The primary input supports a hover state.
pub fn media_query_hover(env: &dyn PointerEnvironment) -> bool {
    env.hover().or_default(false)
}

/// The primary pointer is both fine and hover-capable.
pub fn media_query_pointer_hover(env: &dyn PointerEnvironment) -> bool {
    env.fine_pointer_hover().or_default(false)
}

/// Neither a touch-start capability nor a legacy touch-point count is
/// reported.
pub fn no_touchstart_event(env: &dyn PointerEnvironment) -> bool {
    !env.touch_start().or_default(false) && !env.legacy_max_touch_points().reports_touch()
}

/// The reported maximum touch points is zero or absent.
pub fn no_max_touch_points(env: &dyn PointerEnvironment) -> bool {
    !env.max_touch_points().reports_touch()
}

/// The primary pointer is not coarse.
///
/// Environments without pointer events predate touch-first browsing and are
/// assumed to hover.
pub fn pointer_can_hover(env: &dyn PointerEnvironment) -> bool {
    if !env.pointer_events().or_default(false) {
        return true;
    }
    !env.coarse_pointer().or_default(false)
}

/// At least one attached input, primary or secondary, can hover.
pub fn any_input_can_hover(env: &dyn PointerEnvironment) -> bool {
    env.any_hover().or_default(false)
}

/// Conjunction of [`no_touchstart_event`] and [`no_max_touch_points`].
///
/// Correlated with both by construction, so it is not independent evidence
/// in the consensus vote.
pub fn combined_heuristic(env: &dyn PointerEnvironment) -> bool {
    no_touchstart_event(env) && no_max_touch_points(env)
}
