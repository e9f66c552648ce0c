use crate::math::ColorRgba;
use crate::memory::ProgramId;

use super::{ClearCommand, Command, DrawCommand, VertexArray};

/// Ordered command queue. Executed front to back, exactly once per entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuffer {
    commands: Vec<Command>,
}

impl CommandBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn push_clear(&mut self, cmd: ClearCommand) {
        self.push(Command::Clear(cmd));
    }

    /// Records a color-only clear.
    pub fn push_clear_color(&mut self, color: ColorRgba) {
        self.push_clear(ClearCommand { color, clear_color: true, ..ClearCommand::default() });
    }

    /// Records a depth-only clear.
    pub fn push_clear_depth(&mut self, depth: f32) {
        self.push_clear(ClearCommand { depth, clear_depth: true, ..ClearCommand::default() });
    }

    pub fn push_draw(&mut self, vao: VertexArray, program: ProgramId, vertex_count: u32) {
        self.push(Command::Draw(DrawCommand::new(vao, program, vertex_count)));
    }
}

impl Extend<Command> for CommandBuffer {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl FromIterator<Command> for CommandBuffer {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self { commands: iter.into_iter().collect() }
    }
}
