use crate::math::{Vec2, Vec4};
use crate::memory::Texture;

/// Nearest-neighbor texture fetch with repeat addressing.
///
/// - no pixel data: `(0, 0, 0, 0)`
/// - `uv` wraps to `[0, 1)` by its fractional part
/// - texel = `floor(uv * (size - 1) + 0.5)` per axis
/// - result starts at `(0, 0, 0, 1)`; each declared channel overwrites its
///   component with `byte / 255`
pub fn read_texture(texture: &Texture, uv: Vec2) -> Vec4 {
    if texture.data().is_none() {
        return Vec4::zero();
    }

    let wrapped = uv.fract();
    let x = texel_coord(wrapped.x, texture.width());
    let y = texel_coord(wrapped.y, texture.height());

    let mut color = Vec4::new(0.0, 0.0, 0.0, 1.0);
    if let Some(texel) = texture.texel(x, y) {
        for (c, &byte) in texel.iter().enumerate().take(4) {
            color[c] = byte as f32 / 255.0;
        }
    }
    color
}

fn texel_coord(t: f32, size: u32) -> u32 {
    // `as` saturates, and f32 rounding can push `fract` up to exactly 1.0
    let max = size.saturating_sub(1);
    ((t * max as f32 + 0.5) as u32).min(max)
}
