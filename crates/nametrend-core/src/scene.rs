// File: crates/nametrend-core/src/scene.rs
// Summary: Backend-agnostic draw commands emitted by the renderer.

use crate::geometry::Point;
use crate::types::Rgba;

/// One drawable primitive. Any concrete surface (raster, SVG, terminal)
/// consumes these in emission order; later commands draw over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
    },
    /// `anchor` is the baseline-left corner of the rendered text.
    Text {
        text: String,
        anchor: Point,
        color: Rgba,
    },
}

/// A full drawing plan, in z-order.
pub type Scene = Vec<DrawCmd>;
