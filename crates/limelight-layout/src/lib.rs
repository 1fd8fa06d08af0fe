//! Center-focus carousel layout: insets, focus attributes, snap targets.

mod config;
mod engine;
mod flow;
mod focus;
mod insets;
mod invalidation;
mod item;
mod snap;
mod viewport;

pub use config::*;
pub use engine::*;
pub use flow::*;
pub use focus::*;
pub use insets::*;
pub use invalidation::*;
pub use item::*;
pub use snap::*;
pub use viewport::*;

pub mod prelude {
    pub use crate::config::CarouselConfig;
    pub use crate::engine::CenterFocusLayout;
    pub use crate::flow::{FlowLayout, UniformFlow};
    pub use crate::item::{ElementKind, FocusAttributes, ItemFrame};
    pub use crate::viewport::ViewportSnapshot;
}
