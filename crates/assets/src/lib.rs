//! Texture assets for the demo cube.
//!
//! Images are decoded to tightly packed RGBA8 rows. The GPU samples textures with
//! V pointing up, so loaders can flip rows on the way in.
//!
//! A texture that fails to load is not fatal: callers get a checkerboard and a
//! logged error, and the demo keeps running.

mod texture;

pub use texture::{AssetError, MAX_TEXTURE_DIMENSION, TextureImage, checkerboard, decode, load, load_or_fallback};

pub fn crate_info() -> &'static str {
    "freelook-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("assets"));
    }
}
