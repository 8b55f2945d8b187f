//! Renderer-facing hand-off: which materials take which garment color, and
//! the uniform block a GPU renderer uploads per redraw.

pub mod materials;
pub mod uniforms;
