use crate::memory::{BufferId, MAX_ATTRIBUTES};
use crate::shader::AttributeFormat;

/// Element width of an index buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum IndexType {
    U8,
    U16,
    #[default]
    U32,
}

impl IndexType {
    /// Width of one index in bytes.
    #[inline]
    pub const fn width(self) -> u64 {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Index buffer binding of a vertex array.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct IndexBinding {
    pub buffer: BufferId,
    pub index_type: IndexType,
    /// Byte offset of index 0 within `buffer`.
    pub offset: u64,
}

/// One populated attribute slot: where to fetch it and how many floats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexAttrib {
    pub buffer: BufferId,
    pub offset: u64,
    pub stride: u64,
    pub format: AttributeFormat,
}

impl VertexAttrib {
    #[inline]
    pub const fn new(buffer: BufferId, offset: u64, stride: u64, format: AttributeFormat) -> Self {
        Self { buffer, offset, stride, format }
    }
}

/// Describes where a draw finds its indices and per-vertex attributes.
///
/// `index: None` selects direct indexing (vertex id = invocation number).
/// Attribute slots that are `None` are not fetched.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexArray {
    pub index: Option<IndexBinding>,
    pub attribs: [Option<VertexAttrib>; MAX_ATTRIBUTES],
}

impl VertexArray {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indices(mut self, buffer: BufferId, index_type: IndexType, offset: u64) -> Self {
        self.index = Some(IndexBinding { buffer, index_type, offset });
        self
    }

    /// Fills attribute `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= MAX_ATTRIBUTES`.
    pub fn with_attrib(mut self, slot: usize, attrib: VertexAttrib) -> Self {
        self.attribs[slot] = Some(attrib);
        self
    }

    /// Populated slots with their slot numbers.
    pub fn active_attribs(&self) -> impl Iterator<Item = (usize, &VertexAttrib)> {
        self.attribs
            .iter()
            .enumerate()
            .filter_map(|(slot, a)| a.as_ref().map(|a| (slot, a)))
    }
}
