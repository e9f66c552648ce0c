use crate::error::{GpuError, Result};

/// Render target: an 8-bit-per-channel color plane plus a float depth plane.
///
/// Layout:
/// - color: `width * height * channels` bytes, row-major, channels interleaved
/// - depth: `width * height` floats, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    channels: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Allocates a zeroed color plane and a depth plane filled with `1.0`.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(GpuError::InvalidFramebuffer(format!(
                "channel count {channels} not in 1..=4"
            )));
        }
        let pixels = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| GpuError::InvalidFramebuffer(format!("{width}x{height} is too large")))?;

        Ok(Self {
            width,
            height,
            channels,
            color: vec![0; pixels * channels as usize],
            depth: vec![1.0; pixels],
        })
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
    pub fn pixel_count(&self) -> usize {
        self.depth.len()
    }

    #[inline]
    pub fn color(&self) -> &[u8] {
        &self.color
    }

    #[inline]
    pub fn color_mut(&mut self) -> &mut [u8] {
        &mut self.color
    }

    #[inline]
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    #[inline]
    pub fn depth_mut(&mut self) -> &mut [f32] {
        &mut self.depth
    }

    /// Channel bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        let i = self.linear_index(x, y)?;
        let ch = self.channels as usize;
        self.color.get(i * ch..(i + 1) * ch)
    }

    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        self.depth.get(self.linear_index(x, y)?).copied()
    }

    fn linear_index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
