//! Carousel configuration.

use limelight_geometry::Size;

/// Configuration for a center-focus carousel.
///
/// Immutable during a layout pass; replace it wholesale via
/// [`crate::CenterFocusLayout::set_config`] between passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Size of the item resting at the viewport center.
    pub focused_size: Size,

    /// Size of an item at or beyond the active distance.
    pub unfocused_size: Size,

    /// Opacity floor for items at or beyond the active distance, in `[0, 1]`.
    pub unfocused_opacity: f32,

    /// Nominal spacing between consecutive items before focus adjustment.
    /// May be negative, overlapping neighbors.
    pub base_spacing: f32,
}

impl CarouselConfig {
    /// Creates a configuration, clamping out-of-domain values.
    ///
    /// Negative size components are clamped to zero and opacity to `[0, 1]`.
    /// A clamp is reported through `log::warn!` since it usually points at a
    /// caller bug rather than an intentional setup.
    pub fn new(
        focused_size: Size,
        unfocused_size: Size,
        unfocused_opacity: f32,
        base_spacing: f32,
    ) -> Self {
        let unfocused_opacity = if (0.0..=1.0).contains(&unfocused_opacity) {
            unfocused_opacity
        } else {
            log::warn!(
                "CarouselConfig: unfocused_opacity {} outside [0, 1], clamping",
                unfocused_opacity
            );
            unfocused_opacity.clamp(0.0, 1.0)
        };

        Self {
            focused_size: clamp_size(focused_size, "focused_size"),
            unfocused_size: clamp_size(unfocused_size, "unfocused_size"),
            unfocused_opacity,
            base_spacing,
        }
    }

    /// Line spacing handed to the base flow layout.
    ///
    /// Narrowed by half the focused/unfocused width delta so that unfocused
    /// neighbors stay visually adjacent despite their reduced width.
    pub fn effective_line_spacing(&self) -> f32 {
        self.base_spacing - (self.focused_size.width - self.unfocused_size.width) / 2.0
    }

    /// Distance from the visible center beyond which items receive the
    /// unfocused attributes exactly.
    pub fn active_distance(&self) -> f32 {
        self.focused_size.width / 2.0 + 2.0 * self.effective_line_spacing()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            focused_size: Size::ZERO,
            unfocused_size: Size::ZERO,
            unfocused_opacity: 1.0,
            base_spacing: 0.0,
        }
    }
}

fn clamp_size(size: Size, field: &str) -> Size {
    if size.width >= 0.0 && size.height >= 0.0 {
        size
    } else {
        log::warn!(
            "CarouselConfig: {field} has negative component ({} x {}), clamping to zero",
            size.width,
            size.height
        );
        Size::new(size.width.max(0.0), size.height.max(0.0))
    }
}
