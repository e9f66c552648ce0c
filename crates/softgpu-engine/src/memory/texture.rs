use crate::error::{GpuError, Result};

/// 2D texture with 8 bits per channel, row-major, channels interleaved.
///
/// Invariants (checked by [`Texture::new`] and [`Texture::without_data`]):
/// - `1 <= channels <= 4`, non-zero size
/// - when present, `data.len() == width * height * channels`
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    channels: u32,
    data: Option<Vec<u8>>,
}

impl Texture {
    pub fn new(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = check_shape(width, height, channels)?;
        if data.len() != expected {
            return Err(GpuError::InvalidTexture(format!(
                "{width}x{height}x{channels} texture needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { width, height, channels, data: Some(data) })
    }

    /// A texture that declares a shape but carries no pixels.
    /// Sampling it yields transparent black.
    pub fn without_data(width: u32, height: u32, channels: u32) -> Result<Self> {
        check_shape(width, height, channels)?;
        Ok(Self { width, height, channels, data: None })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    #[inline]
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Channel bytes of texel `(x, y)`, or `None` if the texture has no data
    /// or the coordinate is outside it.
    pub fn texel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let ch = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * ch;
        self.data.as_deref()?.get(start..start + ch)
    }
}

/// Validates the shape and returns the byte size of its pixel data.
fn check_shape(width: u32, height: u32, channels: u32) -> Result<usize> {
    if !(1..=4).contains(&channels) {
        return Err(GpuError::InvalidTexture(format!("channel count {channels} not in 1..=4")));
    }
    if width == 0 || height == 0 {
        return Err(GpuError::InvalidTexture(format!("zero-sized texture {width}x{height}")));
    }
    Ok(width as usize * height as usize * channels as usize)
}
