//! Viewport snapshot handed to the engine on every query.

use limelight_geometry::{EdgeInsets, Point, Rect, Size};

/// Read-only view of the host scroll container at the time of a query.
///
/// The engine holds no reference to any live widget; the host captures a
/// snapshot and passes it explicitly to each call that needs one. The
/// snapshot is transient and discarded after the pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportSnapshot {
    /// Size of the visible scrolling area.
    pub size: Size,

    /// Insets reserved by the host (e.g. safe areas).
    pub content_inset: EdgeInsets,

    /// Current scroll position.
    pub content_offset: Point,
}

impl ViewportSnapshot {
    pub fn new(size: Size, content_inset: EdgeInsets, content_offset: Point) -> Self {
        Self {
            size,
            content_inset,
            content_offset,
        }
    }

    /// Rectangle of content currently visible.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.content_offset, self.size)
    }

    /// Center of the visible rectangle along the scroll axis.
    pub fn visible_center_x(&self) -> f32 {
        self.content_offset.x + self.size.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_rect_tracks_offset() {
        let viewport = ViewportSnapshot::new(
            Size::new(300.0, 600.0),
            EdgeInsets::default(),
            Point::new(140.0, 0.0),
        );
        let rect = viewport.visible_rect();
        assert_eq!(rect.x, 140.0);
        assert_eq!(rect.width, 300.0);
        assert_eq!(viewport.visible_center_x(), 290.0);
    }
}
