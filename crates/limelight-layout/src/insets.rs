//! Section inset calculation for end-item centering.

use limelight_geometry::{EdgeInsets, Size};

use crate::viewport::ViewportSnapshot;

/// Computes symmetric section insets so the first and last items can reach
/// the centered position at the extreme scroll offsets.
///
/// Half the leftover space (after the host's content insets and the
/// focused item) goes to each edge. May return negative insets when the
/// focused size exceeds the viewport; the host applies them as-is and
/// items overlap the viewport edge.
pub fn compute_insets(viewport: &ViewportSnapshot, focused_size: Size) -> EdgeInsets {
    let vertical = (viewport.size.height
        - viewport.content_inset.top
        - viewport.content_inset.bottom
        - focused_size.height)
        / 2.0;
    let horizontal = (viewport.size.width
        - viewport.content_inset.right
        - viewport.content_inset.left
        - focused_size.width)
        / 2.0;
    EdgeInsets::symmetric(horizontal, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_geometry::Point;

    #[test]
    fn insets_center_the_focused_item() {
        let viewport = ViewportSnapshot::new(
            Size::new(600.0, 400.0),
            EdgeInsets::default(),
            Point::ZERO,
        );
        let insets = compute_insets(&viewport, Size::new(200.0, 200.0));
        assert_eq!(insets.left, 200.0);
        assert_eq!(insets.top, 100.0);
    }

    #[test]
    fn insets_are_symmetric() {
        let viewport = ViewportSnapshot::new(
            Size::new(613.0, 371.0),
            EdgeInsets::from_components(12.0, 44.0, 12.0, 34.0),
            Point::ZERO,
        );
        let insets = compute_insets(&viewport, Size::new(180.0, 240.0));
        assert_eq!(insets.left, insets.right);
        assert_eq!(insets.top, insets.bottom);
    }

    #[test]
    fn host_content_insets_shrink_the_leftover() {
        let viewport = ViewportSnapshot::new(
            Size::new(600.0, 400.0),
            EdgeInsets::from_components(40.0, 20.0, 60.0, 30.0),
            Point::ZERO,
        );
        let insets = compute_insets(&viewport, Size::new(200.0, 200.0));
        // (600 - 40 - 60 - 200) / 2 and (400 - 20 - 30 - 200) / 2
        assert_eq!(insets.left, 150.0);
        assert_eq!(insets.top, 75.0);
    }

    #[test]
    fn oversized_focus_yields_negative_insets() {
        let viewport = ViewportSnapshot::new(
            Size::new(300.0, 200.0),
            EdgeInsets::default(),
            Point::ZERO,
        );
        let insets = compute_insets(&viewport, Size::new(400.0, 300.0));
        assert_eq!(insets.left, -50.0);
        assert_eq!(insets.top, -50.0);
    }
}
