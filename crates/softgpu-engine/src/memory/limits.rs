/// Number of vertex attribute slots in a vertex array, in-vertex and out-vertex.
pub const MAX_ATTRIBUTES: usize = 16;

/// Fixed capacities of the memory image tables.
///
/// Keep defaults in line with what shader code expects to address; raise a
/// limit only when a scene needs it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GpuLimits {
    pub max_buffers: usize,
    pub max_textures: usize,
    pub max_programs: usize,
    pub max_uniforms: usize,
}

impl Default for GpuLimits {
    fn default() -> Self {
        Self {
            max_buffers: 32,
            max_textures: 32,
            max_programs: 32,
            max_uniforms: 10_000,
        }
    }
}
