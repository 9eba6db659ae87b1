use crate::foundation::core::Resolution;
use crate::foundation::error::{TurntableError, TurntableResult};

/// Bytes per pixel of a [`RawImage`] (packed RGB24).
pub const RAW_CHANNELS: usize = 3;

/// A rendered frame as packed RGB24 rows, no padding and no header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes, one row after another.
    pub data: Vec<u8>,
}

impl RawImage {
    /// Wrap `data`, checking that it holds exactly `width * height` RGB24 pixels.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> TurntableResult<Self> {
        if width == 0 || height == 0 {
            return Err(TurntableError::validation(
                "raw image width/height must be non-zero",
            ));
        }
        let expected = raw_frame_len((width, height));
        if data.len() != expected {
            return Err(TurntableError::validation(format!(
                "raw image data size mismatch: got {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame filled with one color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> TurntableResult<Self> {
        let data = rgb.repeat(raw_frame_len((width, height)) / RAW_CHANNELS);
        Self::new(width, height, data)
    }

    /// `(width, height)`.
    pub fn resolution(&self) -> Resolution {
        (self.width, self.height)
    }

    /// Raw pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for RawImage {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<image::RgbImage> for RawImage {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

impl TryFrom<RawImage> for image::RgbImage {
    type Error = TurntableError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        image::RgbImage::from_raw(raw.width, raw.height, raw.data)
            .ok_or_else(|| TurntableError::validation("raw image buffer too small for its size"))
    }
}

/// Byte length of one packed RGB24 frame.
pub fn raw_frame_len((width, height): Resolution) -> usize {
    (width as usize) * (height as usize) * RAW_CHANNELS
}

/// Something that can render the current scene into a [`RawImage`].
pub trait FrameRenderer {
    /// Render one frame with the renderer's current camera.
    fn render_to_image(&mut self) -> TurntableResult<RawImage>;
}

impl<T: FrameRenderer + ?Sized> FrameRenderer for &mut T {
    fn render_to_image(&mut self) -> TurntableResult<RawImage> {
        (**self).render_to_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
