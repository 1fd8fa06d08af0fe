//! Snap target resolution: settle on the item nearest the proposed center.

use limelight_geometry::Point;

use crate::item::{ElementKind, ItemFrame};

/// Returns the offset that centers the ordinary item nearest the proposed
/// stopping point.
///
/// `_velocity` is accepted for interface compatibility with the host's
/// gesture system; snapping is purely positional. The vertical component
/// of the proposal passes through untouched, and with no ordinary items
/// in `frames` the proposal is returned unchanged.
///
/// Callers supply frames in ascending index order; an exact distance tie
/// goes to the first frame encountered.
pub fn resolve_snap_target(
    proposed: Point,
    _velocity: Point,
    viewport_width: f32,
    frames: &[ItemFrame],
) -> Point {
    let half_width = viewport_width / 2.0;
    let proposed_center = proposed.x + half_width;

    let mut nearest: Option<&ItemFrame> = None;
    for frame in frames {
        if frame.kind != ElementKind::Item {
            continue;
        }
        let distance = (frame.center.x - proposed_center).abs();
        let closer = match nearest {
            Some(best) => distance < (best.center.x - proposed_center).abs(),
            None => true,
        };
        if closer {
            nearest = Some(frame);
        }
    }

    match nearest {
        Some(frame) => Point::new(frame.center.x - half_width, proposed.y),
        None => proposed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_geometry::Size;

    fn frame_at(index: usize, x: f32) -> ItemFrame {
        ItemFrame::item(index, Point::new(x, 100.0), Size::new(200.0, 200.0))
    }

    #[test]
    fn snaps_to_the_nearest_item_center() {
        let frames = [frame_at(0, 50.0), frame_at(1, 350.0), frame_at(2, 650.0)];
        // Proposed center is 140 + 150 = 290; nearest center is 350.
        let target =
            resolve_snap_target(Point::new(140.0, 0.0), Point::ZERO, 300.0, &frames);
        assert_eq!(target.x, 200.0);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn empty_frame_set_passes_the_proposal_through() {
        let proposed = Point::new(140.0, 12.0);
        let target = resolve_snap_target(proposed, Point::ZERO, 300.0, &[]);
        assert_eq!(target, proposed);
    }

    #[test]
    fn resolution_is_idempotent() {
        let frames = [frame_at(0, 50.0), frame_at(1, 350.0), frame_at(2, 650.0)];
        let first = resolve_snap_target(Point::new(140.0, 0.0), Point::ZERO, 300.0, &frames);
        let second = resolve_snap_target(first, Point::ZERO, 300.0, &frames);
        assert_eq!(first, second);
    }

    #[test]
    fn exact_tie_goes_to_the_first_frame() {
        // Centers 100 and 300 are both 100 away from the proposed center 200.
        let frames = [frame_at(0, 100.0), frame_at(1, 300.0)];
        let target = resolve_snap_target(Point::new(50.0, 0.0), Point::ZERO, 300.0, &frames);
        assert_eq!(target.x, 100.0 - 150.0);
    }

    #[test]
    fn decorations_are_never_snap_targets() {
        let frames = [
            ItemFrame::decoration(0, Point::new(290.0, 100.0), Size::new(600.0, 10.0)),
            frame_at(1, 650.0),
        ];
        let target =
            resolve_snap_target(Point::new(140.0, 0.0), Point::ZERO, 300.0, &frames);
        assert_eq!(target.x, 500.0);
    }

    #[test]
    fn only_decorations_behaves_like_empty() {
        let frames = [ItemFrame::decoration(
            0,
            Point::new(290.0, 100.0),
            Size::new(600.0, 10.0),
        )];
        let proposed = Point::new(140.0, 0.0);
        let target = resolve_snap_target(proposed, Point::ZERO, 300.0, &frames);
        assert_eq!(target, proposed);
    }

    #[test]
    fn velocity_does_not_change_the_target() {
        let frames = [frame_at(0, 50.0), frame_at(1, 350.0)];
        let slow = resolve_snap_target(Point::new(140.0, 0.0), Point::ZERO, 300.0, &frames);
        let fast = resolve_snap_target(
            Point::new(140.0, 0.0),
            Point::new(9_000.0, 0.0),
            300.0,
            &frames,
        );
        assert_eq!(slow, fast);
    }

    #[test]
    fn vertical_offset_passes_through() {
        let frames = [frame_at(0, 350.0)];
        let target =
            resolve_snap_target(Point::new(0.0, 42.0), Point::ZERO, 300.0, &frames);
        assert_eq!(target.y, 42.0);
    }
}
