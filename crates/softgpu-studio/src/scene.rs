//! Demo scene: a textured grid drawn twice with different transforms.

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};

use softgpu_engine::cmd::{ClearCommand, CommandBuffer, IndexType, VertexArray, VertexAttrib};
use softgpu_engine::math::{ColorRgba, Mat4, Vec2, Vec3, Vec4};
use softgpu_engine::memory::{Buffer, BufferId, GpuMemory, ProgramId, Texture, TextureId, UniformValue};
use softgpu_engine::shader::{AttributeFormat, AttributeValue, InVertex, OutVertex, Program, ShaderInterface};

const VERTICES: BufferId = BufferId(0);
const INDICES_U16: BufferId = BufferId(1);
const INDICES_U8: BufferId = BufferId(2);
const CHECKER: TextureId = TextureId(0);
const TEXTURED: ProgramId = ProgramId(0);

/// Cells per grid side.
const GRID: u32 = 8;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GridVertex {
    position: Vec3,
    uv: Vec2,
}

/// Uploads buffers, texture, uniforms and the program into `mem`.
pub fn populate(mem: &mut GpuMemory) -> Result<()> {
    let (vertices, indices) = grid_mesh(GRID);
    let narrow: Vec<u8> = indices
        .iter()
        .map(|&i| u8::try_from(i))
        .collect::<Result<_, _>>()
        .context("grid too large for 8-bit indices")?;

    mem.set_buffer(VERTICES, Buffer::from_pod(&vertices))?;
    mem.set_buffer(INDICES_U16, Buffer::from_pod(&indices))?;
    mem.set_buffer(INDICES_U8, Buffer::from_pod(&narrow))?;
    mem.set_texture(CHECKER, checker_texture(4)?)?;

    // one MVP per draw, addressed by gl_draw_id
    let uniforms = mem.uniforms_mut();
    uniforms.set(0, UniformValue::Mat4(Mat4::translation(-0.45, 0.0, 0.0) * Mat4::scale(0.5, 0.8, 1.0)))?;
    uniforms.set(1, UniformValue::Mat4(Mat4::translation(0.45, 0.0, 0.0) * Mat4::scale(0.4, 0.4, 1.0)))?;

    mem.set_program(TEXTURED, textured_program())?;
    Ok(())
}

/// Records: full clear, grid via 16-bit indices, depth clear, grid via 8-bit indices.
pub fn record() -> CommandBuffer {
    let stride = size_of::<GridVertex>() as u64;
    let attribs = VertexArray::new()
        .with_attrib(0, VertexAttrib::new(VERTICES, 0, stride, AttributeFormat::Vec3))
        .with_attrib(1, VertexAttrib::new(VERTICES, 12, stride, AttributeFormat::Vec2));
    let index_count = GRID * GRID * 6;

    let mut cb = CommandBuffer::new();
    cb.push_clear(ClearCommand {
        color: ColorRgba::new(0.1, 0.1, 0.15, 1.0),
        depth: 1.0,
        clear_color: true,
        clear_depth: true,
    });
    cb.push_draw(attribs.with_indices(INDICES_U16, IndexType::U16, 0), TEXTURED, index_count);
    cb.push_clear_depth(1.0);
    cb.push_draw(attribs.with_indices(INDICES_U8, IndexType::U8, 0), TEXTURED, index_count);
    cb
}

fn textured_program() -> Program {
    Program::new(|v: &InVertex, si: &ShaderInterface<'_>| {
        let mvp = si
            .uniform(v.gl_draw_id as usize)
            .ok()
            .and_then(|u| u.as_mat4())
            .unwrap_or_default();
        let position = v.attributes[0].as_vec3().unwrap_or_default();
        let uv = v.attributes[1].as_vec2().unwrap_or_default();

        let mut out = OutVertex {
            gl_position: mvp * position.extend(1.0),
            ..OutVertex::default()
        };
        // out-of-range ids are already logged by the shader interface
        out.attributes[0] = AttributeValue::Vec4(si.sample(CHECKER, uv).unwrap_or_default());
        out
    })
    .with_varying(0, AttributeFormat::Vec4)
}

/// `cells x cells` quads over `[-1, 1]^2`; uv spans `[0, 2]` so the texture repeats.
fn grid_mesh(cells: u32) -> (Vec<GridVertex>, Vec<u16>) {
    let side = cells + 1;
    let mut vertices = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            let (s, t) = (x as f32 / cells as f32, y as f32 / cells as f32);
            vertices.push(GridVertex {
                position: Vec3::new(s * 2.0 - 1.0, t * 2.0 - 1.0, 0.0),
                uv: Vec2::new(s * 2.0, t * 2.0),
            });
        }
    }

    let mut indices = Vec::with_capacity((cells * cells * 6) as usize);
    for y in 0..cells {
        for x in 0..cells {
            let i = (y * side + x) as u16;
            let below = i + side as u16;
            indices.extend_from_slice(&[i, i + 1, below + 1, i, below + 1, below]);
        }
    }
    (vertices, indices)
}

fn checker_texture(size: u32) -> Result<Texture> {
    let mut data = Vec::with_capacity((size * size * 3) as usize);
    for y in 0..size {
        for x in 0..size {
            let texel = if (x + y) % 2 == 0 { [240, 200, 60] } else { [40, 90, 200] };
            data.extend_from_slice(&texel);
        }
    }
    Ok(Texture::new(size, size, 3, data)?)
}

/// Marks each vertex position as one pixel in an RGBA image,
/// colored by varying 0. A debugging view, not a rasterizer.
pub fn plot_vertices(
    color: &mut [u8],
    width: u32,
    height: u32,
    vertices: impl Iterator<Item = OutVertex>,
) {
    for v in vertices {
        let p = v.gl_position;
        if p.w == 0.0 {
            continue;
        }
        let (ndc_x, ndc_y) = (p.x / p.w, p.y / p.w);
        let x = ((ndc_x * 0.5 + 0.5) * (width - 1) as f32).round();
        let y = ((0.5 - ndc_y * 0.5) * (height - 1) as f32).round();
        if !(0.0..width as f32).contains(&x) || !(0.0..height as f32).contains(&y) {
            continue;
        }

        let rgba = v.attributes[0].as_vec4().unwrap_or(Vec4::new(1.0, 1.0, 1.0, 1.0));
        let i = (y as usize * width as usize + x as usize) * 4;
        let px = ColorRgba::new(rgba.x, rgba.y, rgba.z, 1.0).to_unorm8();
        color[i..i + 4].copy_from_slice(&px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_counts() {
        let (v, i) = grid_mesh(2);
        assert_eq!(v.len(), 9);
        assert_eq!(i.len(), 24);
        assert!(i.iter().all(|&idx| (idx as usize) < v.len()));
    }

    #[test]
    fn grid_vertex_is_tightly_packed() {
        assert_eq!(size_of::<GridVertex>(), 20);
    }

    #[test]
    fn plot_skips_offscreen_vertices() {
        let mut color = vec![0u8; 4 * 4 * 4];
        let inside = OutVertex { gl_position: Vec4::new(-1.0, 1.0, 0.0, 1.0), ..OutVertex::default() };
        let outside = OutVertex { gl_position: Vec4::new(3.0, 0.0, 0.0, 1.0), ..OutVertex::default() };
        plot_vertices(&mut color, 4, 4, [inside, outside].into_iter());
        assert_eq!(&color[..4], &[255u8, 255, 255, 255]);
        assert_eq!(color.iter().filter(|&&c| c != 0).count(), 4);
    }
}
