/// Straight-alpha RGBA color with float channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to 8-bit unsigned channels with `floor(c * 255)`.
    ///
    /// Out-of-range inputs saturate to `0` / `255` (float-to-int `as` semantics).
    #[inline]
    pub fn to_unorm8(self) -> [u8; 4] {
        self.to_array().map(|c| (c * 255.0) as u8)
    }
}
