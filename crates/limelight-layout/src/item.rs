//! Item frames produced by the base flow layout and their derived
//! focus attributes.

use limelight_geometry::{Point, Rect, Size};
use smallvec::SmallVec;

/// Role of a frame within the scrolling content.
///
/// Snap resolution only considers ordinary items; decoration frames
/// (headers, separators, backgrounds) keep their place in the frame set
/// but never become snap targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Item,
    Decoration,
}

/// A single element's placement before focus interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    /// Index in the item sequence.
    pub index: usize,

    /// Role of this frame within the content.
    pub kind: ElementKind,

    /// Center of the frame; only `x` participates in focus math.
    pub center: Point,

    /// Size before interpolation. Under carousel wiring this is the
    /// focused size, since the base flow places items at that size.
    pub base_size: Size,
}

impl ItemFrame {
    /// Creates an ordinary content item frame.
    pub fn item(index: usize, center: Point, base_size: Size) -> Self {
        Self {
            index,
            kind: ElementKind::Item,
            center,
            base_size,
        }
    }

    /// Creates a decoration frame, excluded from snap resolution.
    pub fn decoration(index: usize, center: Point, base_size: Size) -> Self {
        Self {
            index,
            kind: ElementKind::Decoration,
            center,
            base_size,
        }
    }

    /// Bounding rectangle of the frame.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.base_size)
    }
}

/// Interpolated visual attributes for one frame.
///
/// A companion value consumed by the host renderer; the engine never
/// mutates the frame itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusAttributes {
    /// Index of the frame these attributes belong to.
    pub index: usize,

    /// Interpolated size.
    pub size: Size,

    /// Interpolated opacity in `[unfocused_opacity, 1]`.
    pub opacity: f32,
}

/// Inline capacity 8: a center-focus carousel rarely shows more frames at
/// once, so the per-pass output avoids heap allocation in the common case.
pub type AttributeVec = SmallVec<[FocusAttributes; 8]>;
