//! Focus attribute interpolation by distance from the visible center.

use limelight_geometry::{Rect, Size};

use crate::config::CarouselConfig;
use crate::item::{AttributeVec, FocusAttributes, ItemFrame};

/// Computes per-frame size and opacity from the distance between each
/// frame's center and the center of `visible_rect`.
///
/// Within the active distance both attributes interpolate linearly toward
/// the focused values; at and beyond it they clamp exactly to the
/// unfocused values, so the mapping is continuous across the threshold.
/// Frames whose bounds do not intersect `visible_rect` keep their base
/// attributes (the base layout normally culls them before they reach this
/// mapper).
pub fn compute_attributes(
    config: &CarouselConfig,
    visible_rect: Rect,
    frames: &[ItemFrame],
) -> AttributeVec {
    let active_distance = config.active_distance();
    let visible_center = visible_rect.center_x();

    frames
        .iter()
        .map(|frame| {
            if !frame.rect().intersects(visible_rect) {
                return FocusAttributes {
                    index: frame.index,
                    size: frame.base_size,
                    opacity: 1.0,
                };
            }

            let distance = (visible_center - frame.center.x).abs();
            if distance < active_distance {
                let t = 1.0 - distance / active_distance;
                FocusAttributes {
                    index: frame.index,
                    size: lerp_size(config.unfocused_size, config.focused_size, t),
                    opacity: config.unfocused_opacity + t * (1.0 - config.unfocused_opacity),
                }
            } else {
                FocusAttributes {
                    index: frame.index,
                    size: config.unfocused_size,
                    opacity: config.unfocused_opacity,
                }
            }
        })
        .collect()
}

fn lerp_size(from: Size, to: Size, t: f32) -> Size {
    Size::new(
        from.width + (to.width - from.width) * t,
        from.height + (to.height - from.height) * t,
    )
}
