use std::path::Path;

/// Errors from texture loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image is {width}x{height}, larger than the {max}px texture limit")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// Largest side a texture may have; the default wgpu `max_texture_dimension_2d`.
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

/// Decoded texture: `width * height` RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Full mip chain starting with this image, halving each side down to 1x1.
    pub fn mip_chain(&self) -> Vec<TextureImage> {
        let mut levels = vec![self.clone()];
        let Some(base) = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
        else {
            return levels;
        };
        let (mut w, mut h) = (self.width, self.height);
        while w > 1 || h > 1 {
            w = (w / 2).max(1);
            h = (h / 2).max(1);
            let level = image::imageops::resize(&base, w, h, image::imageops::FilterType::Triangle);
            levels.push(TextureImage {
                width: w,
                height: h,
                pixels: level.into_raw(),
            });
        }
        levels
    }
}

/// Decode an encoded image (PNG, JPEG, ...) into RGBA8.
pub fn decode(bytes: &[u8], flip_vertically: bool) -> Result<TextureImage, AssetError> {
    let mut img = image::load_from_memory(bytes)?;
    if flip_vertically {
        img = img.flipv();
    }
    let (width, height) = (img.width(), img.height());
    if width > MAX_TEXTURE_DIMENSION || height > MAX_TEXTURE_DIMENSION {
        return Err(AssetError::TooLarge {
            width,
            height,
            max: MAX_TEXTURE_DIMENSION,
        });
    }
    let rgba = img.to_rgba8();
    Ok(TextureImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> Result<TextureImage, AssetError> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes, flip_vertically)
}

/// Load a texture, or log the failure and return a magenta/black checkerboard.
pub fn load_or_fallback(path: impl AsRef<Path>, flip_vertically: bool) -> TextureImage {
    let path = path.as_ref();
    match load(path, flip_vertically) {
        Ok(texture) => {
            tracing::info!(
                "loaded texture {} ({}x{})",
                path.display(),
                texture.width,
                texture.height
            );
            texture
        }
        Err(e) => {
            tracing::error!("failed to load texture {}: {e}", path.display());
            checkerboard(64, 8, [255, 0, 255, 255], [0, 0, 0, 255])
        }
    }
}

/// Square checkerboard of `size` pixels with `cell`-pixel squares.
pub fn checkerboard(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> TextureImage {
    let size = size.max(1);
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            pixels.extend_from_slice(&color);
        }
    }
    TextureImage {
        width: size,
        height: size,
        pixels,
    }
}
