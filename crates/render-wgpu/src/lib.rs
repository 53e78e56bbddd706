//! wgpu render backend for the free-look demo.
//!
//! Draws one textured cube. Two textures are sampled with repeat wrapping and
//! linear filtering and blended in the fragment shader.
//!
//! # Invariants
//! - Renderer never mutates camera state; it only reads a [`RenderView`](freelook_render::RenderView).
//! - Matrices are uploaded column-major, as glam stores them.
//! - GPU objects live as long as the renderer and are released when it drops.

mod gpu;
mod mesh;
mod shaders;
mod texture;

pub use gpu::{CubeRenderer, RendererOptions};
pub use mesh::{TexturedVertex, textured_cube};

pub fn crate_info() -> &'static str {
    "freelook-render-wgpu v0.1.0"
}
