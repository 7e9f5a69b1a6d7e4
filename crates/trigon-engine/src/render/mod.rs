//! GPU rendering subsystem.
//!
//! There is exactly one renderer and it takes no scene input: the triangle
//! geometry and fragment color are fixed, and each frame is a single
//! clear+draw pass. Vertices are already in clip space, so no viewport
//! uniform or coordinate conversion is involved.

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::{TRIANGLE_VERTICES, TriangleRenderer, Vertex};
