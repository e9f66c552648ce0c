use std::fmt;

/// Resource table a bad identifier was looked up in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceKind {
    Buffer,
    Texture,
    Program,
    Uniform,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Buffer => "buffer",
            ResourceKind::Texture => "texture",
            ResourceKind::Program => "program",
            ResourceKind::Uniform => "uniform",
        };
        f.write_str(name)
    }
}

/// Contract violation raised while populating or executing against a
/// [`GpuMemory`](crate::memory::GpuMemory).
///
/// Execution stops at the first error; commands already applied keep their
/// effects.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuError {
    /// A typed read fell (partly) outside the buffer's bytes.
    BufferOutOfBounds { buffer: u32, offset: u64, len: usize, size: usize },
    /// `offset + stride * index` does not fit the address space.
    AddressOverflow { buffer: u32, offset: u64, stride: u64, index: u64 },
    /// Identifier is beyond the fixed capacity of its table.
    IdOutOfRange { kind: ResourceKind, id: u32, limit: usize },
    /// Identifier is in range but nothing was stored there.
    Missing { kind: ResourceKind, id: u32 },
    /// Draw vertex count is not a whole number of triangles.
    PartialTriangle { vertices: u32 },
    InvalidTexture(String),
    InvalidFramebuffer(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::BufferOutOfBounds { buffer, offset, len, size } => write!(
                f,
                "read of {len} bytes at offset {offset} is outside buffer {buffer} ({size} bytes)"
            ),
            GpuError::AddressOverflow { buffer, offset, stride, index } => write!(
                f,
                "address overflow in buffer {buffer}: offset {offset} + stride {stride} * {index}"
            ),
            GpuError::IdOutOfRange { kind, id, limit } => {
                write!(f, "{kind} id {id} exceeds capacity {limit}")
            }
            GpuError::Missing { kind, id } => write!(f, "{kind} {id} is not populated"),
            GpuError::PartialTriangle { vertices } => {
                write!(f, "draw of {vertices} vertices is not a multiple of 3")
            }
            GpuError::InvalidTexture(msg) => write!(f, "invalid texture: {msg}"),
            GpuError::InvalidFramebuffer(msg) => write!(f, "invalid framebuffer: {msg}"),
        }
    }
}

impl std::error::Error for GpuError {}

pub type Result<T, E = GpuError> = std::result::Result<T, E>;
