//! Invalidation policy for bounds changes.

use limelight_geometry::Rect;

/// Which cached layout data a bounds change dirties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidationScope {
    /// Whether insets and spacing must be recomputed as well. Pure offset
    /// changes only require re-running the attribute mapper.
    pub metrics_affected: bool,
}

/// Every bounds change invalidates: focus attributes depend on the live
/// scroll position, not just the viewport size.
pub fn should_invalidate(_old_bounds: Rect, _new_bounds: Rect) -> bool {
    true
}

/// Scope of the invalidation caused by a bounds change.
pub fn invalidation_scope(old_bounds: Rect, new_bounds: Rect) -> InvalidationScope {
    InvalidationScope {
        metrics_affected: old_bounds.size() != new_bounds.size(),
    }
}
