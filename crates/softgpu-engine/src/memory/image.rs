use crate::error::{GpuError, ResourceKind, Result};
use crate::shader::Program;

use super::{Buffer, BufferId, Framebuffer, GpuLimits, ProgramId, Texture, TextureId, Uniforms};

/// Memory image of the emulated GPU.
///
/// Owns every resource the command interpreter can address. Tables have a
/// fixed capacity (see [`GpuLimits`]); a slot is either populated or empty.
///
/// The interpreter borrows the image for the duration of one command buffer,
/// so exclusive access is enforced by the borrow checker rather than locks.
pub struct GpuMemory {
    limits: GpuLimits,
    buffers: Vec<Option<Buffer>>,
    textures: Vec<Option<Texture>>,
    programs: Vec<Option<Program>>,
    uniforms: Uniforms,
    framebuffer: Framebuffer,
}

impl GpuMemory {
    pub fn new(limits: GpuLimits, framebuffer: Framebuffer) -> Self {
        Self {
            limits,
            buffers: std::iter::repeat_with(|| None).take(limits.max_buffers).collect(),
            textures: std::iter::repeat_with(|| None).take(limits.max_textures).collect(),
            programs: std::iter::repeat_with(|| None).take(limits.max_programs).collect(),
            uniforms: Uniforms::new(limits.max_uniforms),
            framebuffer,
        }
    }

    #[inline]
    pub fn limits(&self) -> GpuLimits {
        self.limits
    }

    // ── population ────────────────────────────────────────────────────────

    /// Stores `buffer` at `id`, returning the previous occupant.
    pub fn set_buffer(&mut self, id: BufferId, buffer: Buffer) -> Result<Option<Buffer>> {
        let slot = slot_mut(&mut self.buffers, ResourceKind::Buffer, id.0)?;
        Ok(slot.replace(buffer))
    }

    pub fn set_texture(&mut self, id: TextureId, texture: Texture) -> Result<Option<Texture>> {
        let slot = slot_mut(&mut self.textures, ResourceKind::Texture, id.0)?;
        Ok(slot.replace(texture))
    }

    pub fn set_program(&mut self, id: ProgramId, program: Program) -> Result<Option<Program>> {
        let slot = slot_mut(&mut self.programs, ResourceKind::Program, id.0)?;
        Ok(slot.replace(program))
    }

    pub fn take_buffer(&mut self, id: BufferId) -> Option<Buffer> {
        self.buffers.get_mut(id.index())?.take()
    }

    #[inline]
    pub fn uniforms_mut(&mut self) -> &mut Uniforms {
        &mut self.uniforms
    }

    #[inline]
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    // ── lookup ────────────────────────────────────────────────────────────

    pub fn buffer(&self, id: BufferId) -> Result<&Buffer> {
        slot(&self.buffers, ResourceKind::Buffer, id.0)
    }

    pub fn texture(&self, id: TextureId) -> Result<&Texture> {
        slot(&self.textures, ResourceKind::Texture, id.0)
    }

    pub fn program(&self, id: ProgramId) -> Result<&Program> {
        slot(&self.programs, ResourceKind::Program, id.0)
    }

    /// Texture table including empty slots, indexed by [`TextureId`].
    #[inline]
    pub fn textures(&self) -> &[Option<Texture>] {
        &self.textures
    }

    #[inline]
    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}

fn slot<T>(table: &[Option<T>], kind: ResourceKind, id: u32) -> Result<&T> {
    match table.get(id as usize) {
        Some(Some(item)) => Ok(item),
        Some(None) => Err(GpuError::Missing { kind, id }),
        None => Err(GpuError::IdOutOfRange { kind, id, limit: table.len() }),
    }
}

fn slot_mut<T>(table: &mut [Option<T>], kind: ResourceKind, id: u32) -> Result<&mut Option<T>> {
    let limit = table.len();
    table
        .get_mut(id as usize)
        .ok_or(GpuError::IdOutOfRange { kind, id, limit })
}
