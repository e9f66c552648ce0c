use crate::cmd::VertexArray;
use crate::error::Result;
use crate::memory::GpuMemory;
use crate::shader::{InVertex, OutVertex, Program, ShaderInterface};

use super::{compute_vertex_id, read_attributes};

/// Three vertex-shader outputs forming one triangle-list primitive.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub vertices: [OutVertex; 3],
}

/// Receives assembled triangles (the rasterization side of the pipeline).
pub trait TriangleSink {
    fn triangle(&mut self, draw_id: u32, triangle: Triangle);
}

/// Discards every triangle.
impl TriangleSink for () {
    #[inline]
    fn triangle(&mut self, _draw_id: u32, _triangle: Triangle) {}
}

/// Collects `(draw_id, triangle)` pairs in submission order.
impl TriangleSink for Vec<(u32, Triangle)> {
    #[inline]
    fn triangle(&mut self, draw_id: u32, triangle: Triangle) {
        self.push((draw_id, triangle));
    }
}

impl<S: TriangleSink + ?Sized> TriangleSink for &mut S {
    #[inline]
    fn triangle(&mut self, draw_id: u32, triangle: Triangle) {
        (**self).triangle(draw_id, triangle);
    }
}

/// Runs the vertex shader for invocations `first`, `first + 1`, `first + 2`.
///
/// Each invocation starts from a fresh [`InVertex`]: slots the vertex array
/// leaves empty read as `Unset`, never as a previous vertex's value.
pub fn run_vertex_assembly(
    mem: &GpuMemory,
    program: &Program,
    si: &ShaderInterface<'_>,
    vao: &VertexArray,
    first: u32,
    draw_id: u32,
) -> Result<Triangle> {
    let mut triangle = Triangle::default();

    for (i, out) in triangle.vertices.iter_mut().enumerate() {
        let invocation = first + i as u32;

        let mut in_vertex = InVertex {
            gl_vertex_id: compute_vertex_id(mem, vao, invocation)?,
            gl_draw_id: draw_id,
            ..InVertex::default()
        };
        read_attributes(mem, vao, in_vertex.gl_vertex_id, &mut in_vertex)?;

        *out = program.vertex_shader().run(&in_vertex, si);
    }

    Ok(triangle)
}
