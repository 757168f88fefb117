use crate::channel::Channel;
use crate::error::{PainterError, PainterResult};
use egui::{ColorImage, Vec2};
use image::{DynamicImage, RgbaImage};

/// How the buffer is shown on screen. Never affects the pixel data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// All four channels, as stored
    #[default]
    Composite,
    /// Only the selected channel, as opaque grayscale
    Channel,
}

impl PreviewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Composite => Self::Channel,
            Self::Channel => Self::Composite,
        }
    }
}

/// Owned RGBA8 pixel data, row-major with the origin at the top-left
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single color
    pub fn new(width: usize, height: usize, fill: [u8; 4]) -> Self {
        let data = fill
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();
        Self { width, height, data }
    }

    /// Normalize a decoded image to RGBA8, dropping the original format data
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let rgba = match image {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => {
                log::info!("Converting image to 32bit RGBA format (was {:?})", other.color());
                other.to_rgba8()
            }
        };
        let (width, height) = rgba.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            data: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (x + y * self.width) * 4)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let i = self.index(x, y)?;
        Some(&mut self.data[i..i + 4])
    }

    /// Overwrite one byte lane of a pixel. Returns false when out of bounds.
    pub fn set_channel(&mut self, x: usize, y: usize, channel: Channel, value: u8) -> bool {
        match self.pixel_mut(x, y) {
            Some(px) => {
                px[channel.offset()] = value;
                true
            }
            None => false,
        }
    }

    /// Color under an image-space position, truncated toward zero
    pub fn sample(&self, x: f32, y: f32) -> Option<[u8; 4]> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        self.pixel(x as usize, y as usize)
    }

    /// Build the texture image uploaded for display
    pub fn to_color_image(&self, mode: PreviewMode, channel: Channel) -> ColorImage {
        let size = [self.width, self.height];
        match mode {
            PreviewMode::Composite => ColorImage::from_rgba_unmultiplied(size, &self.data),
            PreviewMode::Channel => {
                let offset = channel.offset();
                let gray: Vec<u8> = self.data.chunks_exact(4).map(|px| px[offset]).collect();
                ColorImage::from_gray(size, &gray)
            }
        }
    }

    /// Copy into an `image` buffer for encoding
    pub fn to_rgba_image(&self) -> PainterResult<RgbaImage> {
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.data.clone()).ok_or(
            PainterError::InvalidDimensions {
                width: self.width as u32,
                height: self.height as u32,
            },
        )
    }
}
