use crate::cmd::VertexArray;
use crate::error::Result;
use crate::math::{Vec2, Vec3, Vec4};
use crate::memory::GpuMemory;
use crate::shader::{AttributeFormat, AttributeValue, InVertex};

/// Fetches every populated attribute slot of `vao` for vertex `vertex_id`
/// into `in_vertex.attributes`.
///
/// Slot data is read at byte `offset + stride * vertex_id` of the slot's
/// buffer. Empty slots are left as they are.
pub fn read_attributes(
    mem: &GpuMemory,
    vao: &VertexArray,
    vertex_id: u32,
    in_vertex: &mut InVertex,
) -> Result<()> {
    for (slot, attrib) in vao.active_attribs() {
        let view = mem.buffer(attrib.buffer)?.view(attrib.buffer);
        let (offset, stride, n) = (attrib.offset, attrib.stride, vertex_id as u64);

        in_vertex.attributes[slot] = match attrib.format {
            AttributeFormat::Float => AttributeValue::Float(view.read_strided::<f32>(offset, stride, n)?),
            AttributeFormat::Vec2 => AttributeValue::Vec2(view.read_strided::<Vec2>(offset, stride, n)?),
            AttributeFormat::Vec3 => AttributeValue::Vec3(view.read_strided::<Vec3>(offset, stride, n)?),
            AttributeFormat::Vec4 => AttributeValue::Vec4(view.read_strided::<Vec4>(offset, stride, n)?),
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::VertexAttrib;
    use crate::error::GpuError;
    use crate::memory::{Buffer, BufferId, Framebuffer, GpuLimits};

    fn mem() -> GpuMemory {
        let mut mem = GpuMemory::new(GpuLimits::default(), Framebuffer::new(1, 1, 4).unwrap());
        // two interleaved vertices: position (vec3) + uv (vec2)
        #[rustfmt::skip]
        let interleaved = [
            0.0f32, 1.0, 2.0,   0.25, 0.5,
            3.0,    4.0, 5.0,   0.75, 1.0,
        ];
        mem.set_buffer(BufferId(0), Buffer::from_pod(&interleaved)).unwrap();
        mem.set_buffer(BufferId(1), Buffer::from_pod(&[10.0f32, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]))
            .unwrap();
        mem
    }

    #[test]
    fn interleaved_vec3_and_vec2() {
        let mem = mem();
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(BufferId(0), 0, 20, AttributeFormat::Vec3))
            .with_attrib(1, VertexAttrib::new(BufferId(0), 12, 20, AttributeFormat::Vec2));

        let mut v = InVertex::default();
        read_attributes(&mem, &vao, 1, &mut v).unwrap();
        assert_eq!(v.attributes[0], AttributeValue::Vec3(Vec3::new(3.0, 4.0, 5.0)));
        assert_eq!(v.attributes[1], AttributeValue::Vec2(Vec2::new(0.75, 1.0)));
        assert!(v.attributes[2..].iter().all(AttributeValue::is_unset));
    }

    #[test]
    fn float_and_vec4_from_separate_slots() {
        let mem = mem();
        let vao = VertexArray::new()
            .with_attrib(2, VertexAttrib::new(BufferId(1), 4, 4, AttributeFormat::Float))
            .with_attrib(5, VertexAttrib::new(BufferId(1), 0, 16, AttributeFormat::Vec4));

        let mut v = InVertex::default();
        read_attributes(&mem, &vao, 1, &mut v).unwrap();
        assert_eq!(v.attributes[2], AttributeValue::Float(30.0));
        assert_eq!(v.attributes[5], AttributeValue::Vec4(Vec4::new(50.0, 60.0, 70.0, 80.0)));
    }

    #[test]
    fn zero_stride_repeats_first_element() {
        let mem = mem();
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(BufferId(1), 8, 0, AttributeFormat::Float));
        let mut v = InVertex::default();
        read_attributes(&mem, &vao, 99, &mut v).unwrap();
        assert_eq!(v.attributes[0], AttributeValue::Float(30.0));
    }

    #[test]
    fn empty_slots_are_untouched() {
        let mem = mem();
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(BufferId(1), 0, 4, AttributeFormat::Float));
        let mut v = InVertex::default();
        v.attributes[3] = AttributeValue::Float(-1.0);
        read_attributes(&mem, &vao, 0, &mut v).unwrap();
        assert_eq!(v.attributes[3], AttributeValue::Float(-1.0));
    }

    #[test]
    fn vertex_past_end_of_buffer_fails() {
        let mem = mem();
        let vao = VertexArray::new()
            .with_attrib(0, VertexAttrib::new(BufferId(1), 0, 16, AttributeFormat::Vec4));
        let mut v = InVertex::default();
        assert!(matches!(
            read_attributes(&mem, &vao, 2, &mut v),
            Err(GpuError::BufferOutOfBounds { buffer: 1, offset: 32, len: 16, size: 32 })
        ));
    }
}
