use crate::cmd::{Command, CommandBuffer};
use crate::error::Result;
use crate::memory::GpuMemory;

use super::{TriangleSink, clear, draw};

/// Counters for one executed command buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ExecStats {
    pub clears: u32,
    pub draws: u32,
    pub triangles: u64,
    pub vertex_invocations: u64,
}

/// Executes `cb` against `mem`, discarding assembled triangles.
pub fn execute(mem: &mut GpuMemory, cb: &CommandBuffer) -> Result<ExecStats> {
    execute_into(mem, cb, &mut ())
}

/// Executes `cb` against `mem` in order, handing assembled triangles to
/// `sink`.
///
/// Draw commands are numbered 0, 1, 2, ... in buffer order; clears do not
/// consume a number. The first failing command aborts execution; effects of
/// earlier commands remain.
pub fn execute_into<S: TriangleSink + ?Sized>(
    mem: &mut GpuMemory,
    cb: &CommandBuffer,
    sink: &mut S,
) -> Result<ExecStats> {
    let mut stats = ExecStats::default();

    for (i, cmd) in cb.commands().iter().enumerate() {
        match cmd {
            Command::Clear(clear_cmd) => {
                log::debug!(
                    "cmd {i}: clear color={} depth={}",
                    clear_cmd.clear_color,
                    clear_cmd.clear_depth
                );
                clear(mem.framebuffer_mut(), clear_cmd);
                stats.clears += 1;
            }
            Command::Draw(draw_cmd) => {
                let draw_id = stats.draws;
                stats.draws += 1;
                log::debug!(
                    "cmd {i}: draw {draw_id} program={} vertices={}",
                    draw_cmd.program,
                    draw_cmd.vertex_count
                );
                let triangles = draw(mem, draw_cmd, draw_id, sink)?;
                stats.triangles += u64::from(triangles);
                stats.vertex_invocations += u64::from(triangles) * 3;
            }
        }
    }

    Ok(stats)
}
