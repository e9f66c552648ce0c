use crate::cmd::DrawCommand;
use crate::error::{GpuError, Result};
use crate::memory::GpuMemory;
use crate::shader::ShaderInterface;

use super::{TriangleSink, run_vertex_assembly};

/// Runs vertex assembly for every triangle of `cmd` and hands the results
/// to `sink`. Returns the number of triangles assembled.
///
/// A vertex count that is not a multiple of 3 rejects the whole command
/// before any shader runs.
pub fn draw<S: TriangleSink + ?Sized>(
    mem: &GpuMemory,
    cmd: &DrawCommand,
    draw_id: u32,
    sink: &mut S,
) -> Result<u32> {
    if cmd.vertex_count % 3 != 0 {
        log::warn!("draw {draw_id}: {} vertices is not a triangle list", cmd.vertex_count);
        return Err(GpuError::PartialTriangle { vertices: cmd.vertex_count });
    }

    let program = mem.program(cmd.program)?;
    let si = ShaderInterface::bind(mem);

    let mut triangles = 0;
    for first in (0..cmd.vertex_count).step_by(3) {
        let triangle = run_vertex_assembly(mem, program, &si, &cmd.vao, first, draw_id)?;
        log::trace!(
            "draw {draw_id}: triangle {triangles} at {:?}",
            triangle.vertices.map(|v| v.gl_position.to_array())
        );
        sink.triangle(draw_id, triangle);
        triangles += 1;
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::VertexArray;
    use crate::exec::Triangle;
    use crate::memory::{Framebuffer, GpuLimits, ProgramId};
    use crate::shader::{InVertex, OutVertex, Program};

    fn mem() -> GpuMemory {
        let mut mem = GpuMemory::new(GpuLimits::default(), Framebuffer::new(1, 1, 4).unwrap());
        mem.set_program(
            ProgramId(0),
            Program::new(|_: &InVertex, _: &ShaderInterface<'_>| OutVertex::default()),
        )
        .unwrap();
        mem
    }

    #[test]
    fn one_triangle_per_three_vertices() {
        let mem = mem();
        let mut out: Vec<(u32, Triangle)> = Vec::new();
        let n = draw(&mem, &DrawCommand::new(VertexArray::new(), ProgramId(0), 9), 4, &mut out).unwrap();
        assert_eq!(n, 3);
        assert!(out.iter().all(|(id, _)| *id == 4));
    }

    #[test]
    fn zero_vertices_is_a_no_op() {
        let mem = mem();
        let mut out: Vec<(u32, Triangle)> = Vec::new();
        assert_eq!(draw(&mem, &DrawCommand::new(VertexArray::new(), ProgramId(0), 0), 0, &mut out), Ok(0));
        assert!(out.is_empty());
    }

    #[test]
    fn partial_triangle_is_rejected_up_front() {
        let mem = mem();
        let mut out: Vec<(u32, Triangle)> = Vec::new();
        let res = draw(&mem, &DrawCommand::new(VertexArray::new(), ProgramId(0), 7), 0, &mut out);
        assert_eq!(res, Err(GpuError::PartialTriangle { vertices: 7 }));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_program_fails() {
        let mem = mem();
        let res = draw(&mem, &DrawCommand::new(VertexArray::new(), ProgramId(1), 3), 0, &mut ());
        assert!(matches!(res, Err(GpuError::Missing { .. })));
    }
}
