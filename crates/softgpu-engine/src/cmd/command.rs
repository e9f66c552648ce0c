use crate::math::ColorRgba;
use crate::memory::ProgramId;

use super::VertexArray;

/// Fills the framebuffer's color and/or depth plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClearCommand {
    pub color: ColorRgba,
    pub depth: f32,
    pub clear_color: bool,
    pub clear_depth: bool,
}

/// Runs the vertex stage of `program` over `vertex_count` vertices as a
/// triangle list.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DrawCommand {
    pub vao: VertexArray,
    pub program: ProgramId,
    /// Must be a multiple of 3.
    pub vertex_count: u32,
}

impl DrawCommand {
    #[inline]
    pub fn new(vao: VertexArray, program: ProgramId, vertex_count: u32) -> Self {
        Self { vao, program, vertex_count }
    }
}

/// One entry of a [`CommandBuffer`](super::CommandBuffer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Clear(ClearCommand),
    Draw(DrawCommand),
}
