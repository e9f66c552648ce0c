use bytemuck::Pod;

use crate::error::{GpuError, Result};

use super::BufferId;

/// Untyped byte region stored in the memory image.
///
/// Contents are only given a type when read through a [`BufferView`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    #[inline]
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copies a slice of plain-old-data values into a new buffer, in their
    /// native in-memory representation.
    pub fn from_pod<T: Pod>(values: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice(values).to_vec())
    }

    pub fn zeroed(len: usize) -> Self {
        Self::from_bytes(vec![0; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrows the buffer for typed reads. `id` is only used for error reports.
    #[inline]
    pub fn view(&self, id: BufferId) -> BufferView<'_> {
        BufferView { id, bytes: &self.data }
    }
}

/// Typed, bounds-checked window over a buffer's bytes.
///
/// This is the single place where raw bytes are reinterpreted as numbers:
/// every index and attribute fetch goes through [`BufferView::read`].
#[derive(Debug, Copy, Clone)]
pub struct BufferView<'a> {
    id: BufferId,
    bytes: &'a [u8],
}

impl<'a> BufferView<'a> {
    #[inline]
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Decodes one `T` starting at byte `offset`. No alignment requirement.
    pub fn read<T: Pod>(&self, offset: u64) -> Result<T> {
        let len = size_of::<T>();
        let out_of_bounds = || GpuError::BufferOutOfBounds {
            buffer: self.id.0,
            offset,
            len,
            size: self.bytes.len(),
        };

        let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        let bytes = self.bytes.get(start..end).ok_or_else(out_of_bounds)?;

        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Decodes element `index` of a strided array: byte position
    /// `offset + stride * index`.
    pub fn read_strided<T: Pod>(&self, offset: u64, stride: u64, index: u64) -> Result<T> {
        let pos = stride
            .checked_mul(index)
            .and_then(|step| step.checked_add(offset))
            .ok_or(GpuError::AddressOverflow { buffer: self.id.0, offset, stride, index })?;
        self.read(pos)
    }
}
