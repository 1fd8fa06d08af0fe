//! Composition root: the engine object the host scroll adapter calls into.

use limelight_geometry::{EdgeInsets, Point, Rect};

use crate::config::CarouselConfig;
use crate::flow::UniformFlow;
use crate::focus::compute_attributes;
use crate::insets::compute_insets;
use crate::invalidation::{invalidation_scope, should_invalidate, InvalidationScope};
use crate::item::{AttributeVec, ItemFrame};
use crate::snap::resolve_snap_target;
use crate::viewport::ViewportSnapshot;

/// Center-focus carousel layout engine.
///
/// Pure geometry: every query takes the viewport snapshot and frame set
/// as explicit arguments and returns a value for the host to apply. The
/// only retained state is the configuration, replaceable wholesale
/// between passes.
///
/// A pass runs in three steps on the host side:
/// 1. apply [`insets`](Self::insets) to the base flow and generate frames,
/// 2. render each frame with its [`attributes`](Self::attributes),
/// 3. on gesture release, settle at [`snap_target`](Self::snap_target).
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterFocusLayout {
    config: CarouselConfig,
}

impl CenterFocusLayout {
    pub fn new(config: CarouselConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Replaces the configuration; takes effect on the next pass.
    pub fn set_config(&mut self, config: CarouselConfig) {
        self.config = config;
    }

    /// Section insets the host applies before generating frames, sized so
    /// the first and last items can reach the center.
    pub fn insets(&self, viewport: &ViewportSnapshot) -> EdgeInsets {
        compute_insets(viewport, self.config.focused_size)
    }

    /// Base flow collaborator wired for this configuration and viewport.
    pub fn flow(&self, viewport: &ViewportSnapshot) -> UniformFlow {
        UniformFlow::for_carousel(&self.config, self.insets(viewport))
    }

    /// Derived size and opacity for each of the given frames.
    pub fn attributes(&self, viewport: &ViewportSnapshot, frames: &[ItemFrame]) -> AttributeVec {
        compute_attributes(&self.config, viewport.visible_rect(), frames)
    }

    /// Final resting offset for a proposed stopping point. Frames must be
    /// in ascending index order for deterministic tie-breaking.
    pub fn snap_target(
        &self,
        proposed: Point,
        velocity: Point,
        viewport: &ViewportSnapshot,
        frames: &[ItemFrame],
    ) -> Point {
        resolve_snap_target(proposed, velocity, viewport.size.width, frames)
    }

    /// Whether a bounds change requires a new pass. Always true.
    pub fn should_invalidate(&self, old_bounds: Rect, new_bounds: Rect) -> bool {
        should_invalidate(old_bounds, new_bounds)
    }

    /// How much of the cached layout the bounds change dirties.
    pub fn invalidation_scope(&self, old_bounds: Rect, new_bounds: Rect) -> InvalidationScope {
        invalidation_scope(old_bounds, new_bounds)
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
