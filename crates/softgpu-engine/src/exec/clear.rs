use crate::cmd::ClearCommand;
use crate::memory::Framebuffer;

/// Applies a clear command to `fb`.
///
/// Color: every pixel gets `floor(c * 255)` of (r, g, b, a), one byte per
/// framebuffer channel. Depth: every element gets `cmd.depth` verbatim.
pub fn clear(fb: &mut Framebuffer, cmd: &ClearCommand) {
    if cmd.clear_color {
        let ch = fb.channels() as usize;
        let rgba = cmd.color.to_unorm8();
        for pixel in fb.color_mut().chunks_exact_mut(ch) {
            pixel.copy_from_slice(&rgba[..ch]);
        }
    }

    if cmd.clear_depth {
        fb.depth_mut().fill(cmd.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ColorRgba;

    fn color_cmd(color: ColorRgba) -> ClearCommand {
        ClearCommand { color, clear_color: true, ..ClearCommand::default() }
    }

    #[test]
    fn color_clear_rgba() {
        let mut fb = Framebuffer::new(2, 2, 4).unwrap();
        clear(&mut fb, &color_cmd(ColorRgba::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(fb.color(), [255u8, 0, 0, 255].repeat(4).as_slice());
        assert!(fb.depth().iter().all(|&d| d == 1.0));
    }

    #[test]
    fn color_clear_writes_framebuffer_channel_count() {
        let mut fb = Framebuffer::new(3, 1, 3).unwrap();
        clear(&mut fb, &color_cmd(ColorRgba::new(0.5, 0.25, 1.0, 0.0)));
        assert_eq!(fb.color(), [127u8, 63, 255].repeat(3).as_slice());

        let mut fb = Framebuffer::new(2, 1, 1).unwrap();
        clear(&mut fb, &color_cmd(ColorRgba::new(0.2, 0.9, 0.9, 0.9)));
        assert_eq!(fb.color(), &[51u8, 51]);
    }

    #[test]
    fn depth_clear_is_verbatim() {
        let mut fb = Framebuffer::new(2, 2, 4).unwrap();
        fb.color_mut().fill(7);
        clear(&mut fb, &ClearCommand { depth: -3.25, clear_depth: true, ..ClearCommand::default() });
        assert!(fb.depth().iter().all(|&d| d == -3.25));
        assert!(fb.color().iter().all(|&c| c == 7));
    }

    #[test]
    fn no_flags_changes_nothing() {
        let mut fb = Framebuffer::new(2, 2, 4).unwrap();
        let before = fb.clone();
        clear(&mut fb, &ClearCommand {
            color: ColorRgba::new(1.0, 1.0, 1.0, 1.0),
            depth: 0.0,
            clear_color: false,
            clear_depth: false,
        });
        assert_eq!(fb, before);
    }

    #[test]
    fn both_planes() {
        let mut fb = Framebuffer::new(1, 1, 2).unwrap();
        clear(&mut fb, &ClearCommand {
            color: ColorRgba::new(0.0, 1.0, 0.0, 0.0),
            depth: 0.5,
            clear_color: true,
            clear_depth: true,
        });
        assert_eq!(fb.color(), &[0u8, 255]);
        assert_eq!(fb.depth(), &[0.5f32]);
    }
}
