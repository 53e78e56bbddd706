//! Rendering Adapter: what a renderer receives each frame.
//!
//! # Invariants
//! - Renderers never mutate the camera.
//! - Every frame carries one view matrix and one projection matrix in the
//!   camera crate's convention (column-major, right-handed).
//! - Viewport sizes are clamped to at least 1x1 before an aspect ratio is taken.

mod renderer;
mod scene;
mod viewport;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use scene::SpinningCube;
pub use viewport::Viewport;

pub fn crate_info() -> &'static str {
    "freelook-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
