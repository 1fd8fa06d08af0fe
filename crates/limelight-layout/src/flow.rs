//! Base flow placement: uniform frames along the scroll axis.
//!
//! The engine never places items itself; a flow collaborator produces the
//! base frames, and the focus mapper derives visual attributes from them.

use std::ops::Range;

use limelight_geometry::{EdgeInsets, Point, Rect, Size};

use crate::config::CarouselConfig;
use crate::item::ItemFrame;

/// Placement collaborator injected into the layout engine.
///
/// Given an index range, produces the base frames for those items. The
/// spacing and item-size configuration lives in the implementor.
pub trait FlowLayout {
    /// Produces frames for `range`, in ascending index order.
    fn frames(&self, range: Range<usize>) -> Vec<ItemFrame>;

    /// Total extent of the content for `item_count` items, insets included.
    fn content_size(&self, item_count: usize) -> Size;
}

/// Uniform horizontal placement with a fixed item size and line spacing.
///
/// Single row: every item sits at the same vertical center, consecutive
/// items are one stride (item width + line spacing) apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformFlow {
    /// Nominal size each item is placed at.
    pub item_size: Size,

    /// Gap between consecutive items; may be negative.
    pub line_spacing: f32,

    /// Padding around the whole section.
    pub section_inset: EdgeInsets,
}

impl UniformFlow {
    pub fn new(item_size: Size, line_spacing: f32, section_inset: EdgeInsets) -> Self {
        Self {
            item_size,
            line_spacing,
            section_inset,
        }
    }

    /// Wires a flow for a carousel: items are placed at the focused size
    /// with the narrowed line spacing, so every center sits where a
    /// focused item would rest.
    pub fn for_carousel(config: &CarouselConfig, section_inset: EdgeInsets) -> Self {
        Self::new(
            config.focused_size,
            config.effective_line_spacing(),
            section_inset,
        )
    }

    /// Distance between consecutive item centers.
    pub fn stride(&self) -> f32 {
        self.item_size.width + self.line_spacing
    }

    fn center_for(&self, index: usize) -> Point {
        Point::new(
            self.section_inset.left + index as f32 * self.stride() + self.item_size.width / 2.0,
            self.section_inset.top + self.item_size.height / 2.0,
        )
    }

    /// Frames whose horizontal extent intersects `rect`, clipped to
    /// `item_count`. Vertical extent is ignored: the flow is single-row.
    pub fn frames_in_rect(&self, rect: Rect, item_count: usize) -> Vec<ItemFrame> {
        if item_count == 0 {
            return Vec::new();
        }

        let stride = self.stride();
        if stride <= 0.0 {
            // Overlap so extreme that items stack; scan rather than index.
            return self
                .frames(0..item_count)
                .into_iter()
                .filter(|frame| frame.rect().intersects(rect))
                .collect();
        }

        // Item i spans [left + i * stride, left + i * stride + width].
        let first = ((rect.x - self.section_inset.left - self.item_size.width) / stride)
            .ceil()
            .max(0.0) as usize;
        let last = ((rect.max_x() - self.section_inset.left) / stride).floor();
        if last < 0.0 || first >= item_count {
            return Vec::new();
        }
        let last = (last as usize).min(item_count - 1);
        if first > last {
            return Vec::new();
        }
        self.frames(first..last + 1)
    }
}

impl FlowLayout for UniformFlow {
    fn frames(&self, range: Range<usize>) -> Vec<ItemFrame> {
        range
            .map(|index| ItemFrame::item(index, self.center_for(index), self.item_size))
            .collect()
    }

    fn content_size(&self, item_count: usize) -> Size {
        let items_extent = if item_count == 0 {
            0.0
        } else {
            item_count as f32 * self.item_size.width + (item_count - 1) as f32 * self.line_spacing
        };
        Size::new(
            self.section_inset.horizontal_sum() + items_extent,
            self.section_inset.vertical_sum() + self.item_size.height,
        )
    }
}
