use crate::error::{GpuError, ResourceKind, Result};
use crate::math::{Vec2, Vec4};
use crate::memory::{GpuMemory, Texture, TextureId, UniformValue, Uniforms};

use super::read_texture;

/// Read-only view of uniforms and textures handed to shader code.
///
/// Ids past the fixed table capacity are contract violations and come back
/// as [`GpuError::IdOutOfRange`]. In-range slots that were never populated
/// are not errors: uniforms read as `Unset`, textures sample as no data.
#[derive(Debug, Copy, Clone)]
pub struct ShaderInterface<'a> {
    uniforms: &'a Uniforms,
    textures: &'a [Option<Texture>],
}

impl<'a> ShaderInterface<'a> {
    pub fn new(uniforms: &'a Uniforms, textures: &'a [Option<Texture>]) -> Self {
        Self { uniforms, textures }
    }

    /// Binds the uniforms and textures of `mem`.
    pub fn bind(mem: &'a GpuMemory) -> Self {
        Self::new(mem.uniforms(), mem.textures())
    }

    pub fn uniform(&self, index: usize) -> Result<UniformValue> {
        self.uniforms.get(index).inspect_err(|e| log::warn!("shader uniform read: {e}"))
    }

    /// Texture bound at `id`; `Ok(None)` for an empty in-range slot.
    pub fn texture(&self, id: TextureId) -> Result<Option<&'a Texture>> {
        match self.textures.get(id.index()) {
            Some(slot) => Ok(slot.as_ref()),
            None => {
                let err = GpuError::IdOutOfRange {
                    kind: ResourceKind::Texture,
                    id: id.0,
                    limit: self.textures.len(),
                };
                log::warn!("shader texture read: {err}");
                Err(err)
            }
        }
    }

    /// Samples texture `id`. An empty in-range slot samples like a texture
    /// without data, `(0, 0, 0, 0)`.
    pub fn sample(&self, id: TextureId, uv: Vec2) -> Result<Vec4> {
        Ok(self.texture(id)?.map_or(Vec4::zero(), |tex| read_texture(tex, uv)))
    }
}
