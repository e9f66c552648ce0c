use crate::cmd::{IndexType, VertexArray};
use crate::error::Result;
use crate::memory::GpuMemory;

/// Resolves the vertex index used by shader invocation `invocation`.
///
/// Without an index buffer the invocation number is the vertex index.
/// Otherwise one index of the bound width is read at byte
/// `offset + invocation * width` and widened to `u32`.
pub fn compute_vertex_id(mem: &GpuMemory, vao: &VertexArray, invocation: u32) -> Result<u32> {
    let Some(binding) = vao.index else {
        return Ok(invocation);
    };

    let view = mem.buffer(binding.buffer)?.view(binding.buffer);
    let (offset, width, n) = (binding.offset, binding.index_type.width(), invocation as u64);

    let id = match binding.index_type {
        IndexType::U8 => view.read_strided::<u8>(offset, width, n)? as u32,
        IndexType::U16 => view.read_strided::<u16>(offset, width, n)? as u32,
        IndexType::U32 => view.read_strided::<u32>(offset, width, n)?,
    };
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GpuError;
    use crate::memory::{Buffer, BufferId, Framebuffer, GpuLimits};

    fn mem_with(buffer: Buffer) -> GpuMemory {
        let mut mem = GpuMemory::new(GpuLimits::default(), Framebuffer::new(1, 1, 4).unwrap());
        mem.set_buffer(BufferId(2), buffer).unwrap();
        mem
    }

    #[test]
    fn direct_indexing_returns_invocation() {
        let mem = mem_with(Buffer::zeroed(0));
        let vao = VertexArray::new();
        for n in [0, 1, 2, 17, u32::MAX] {
            assert_eq!(compute_vertex_id(&mem, &vao, n).unwrap(), n);
        }
    }

    #[test]
    fn u8_indices() {
        let mem = mem_with(Buffer::from_pod(&[9u8, 4, 200, 7]));
        let vao = VertexArray::new().with_indices(BufferId(2), IndexType::U8, 1);
        assert_eq!(compute_vertex_id(&mem, &vao, 0).unwrap(), 4);
        assert_eq!(compute_vertex_id(&mem, &vao, 1).unwrap(), 200);
    }

    #[test]
    fn u16_indices_with_offset() {
        let mem = mem_with(Buffer::from_pod(&[0xFFFFu16, 3, 60000, 5]));
        let vao = VertexArray::new().with_indices(BufferId(2), IndexType::U16, 2);
        assert_eq!(compute_vertex_id(&mem, &vao, 0).unwrap(), 3);
        assert_eq!(compute_vertex_id(&mem, &vao, 1).unwrap(), 60000);
        assert_eq!(compute_vertex_id(&mem, &vao, 2).unwrap(), 5);
    }

    #[test]
    fn u32_indices() {
        let mem = mem_with(Buffer::from_pod(&[10u32, 70_000, 2]));
        let vao = VertexArray::new().with_indices(BufferId(2), IndexType::U32, 0);
        assert_eq!(compute_vertex_id(&mem, &vao, 1).unwrap(), 70_000);
        assert_eq!(compute_vertex_id(&mem, &vao, 2).unwrap(), 2);
    }

    #[test]
    fn odd_offset_u32_read_is_unaligned() {
        let mut bytes = vec![0u8; 3];
        bytes.extend_from_slice(&123_456u32.to_ne_bytes());
        let mem = mem_with(Buffer::from_bytes(bytes));
        let vao = VertexArray::new().with_indices(BufferId(2), IndexType::U32, 3);
        assert_eq!(compute_vertex_id(&mem, &vao, 0).unwrap(), 123_456);
    }

    #[test]
    fn reading_past_index_buffer_fails() {
        let mem = mem_with(Buffer::from_pod(&[1u16, 2]));
        let vao = VertexArray::new().with_indices(BufferId(2), IndexType::U16, 0);
        assert!(matches!(
            compute_vertex_id(&mem, &vao, 2),
            Err(GpuError::BufferOutOfBounds { buffer: 2, offset: 4, len: 2, size: 4 })
        ));
    }

    #[test]
    fn unpopulated_index_buffer_fails() {
        let mem = mem_with(Buffer::zeroed(4));
        let vao = VertexArray::new().with_indices(BufferId(3), IndexType::U8, 0);
        assert!(matches!(compute_vertex_id(&mem, &vao, 0), Err(GpuError::Missing { .. })));
    }
}
