/// Drawable surface size in physical pixels. Never smaller than 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Zero-sized dimensions (minimized windows) are clamped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            tracing::trace!("clamping {width}x{height} viewport");
        }
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
