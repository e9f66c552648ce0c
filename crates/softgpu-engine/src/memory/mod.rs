//! Memory image: the passive storage the command interpreter addresses.
//!
//! Responsibilities:
//! - fixed-capacity tables of buffers, textures and programs
//! - uniform slots and the framebuffer
//! - the bounds-checked typed view used for every raw byte access

mod buffer;
mod framebuffer;
mod id;
mod image;
mod limits;
mod texture;
mod uniform;

pub use buffer::{Buffer, BufferView};
pub use framebuffer::Framebuffer;
pub use id::{BufferId, ProgramId, TextureId};
pub use image::GpuMemory;
pub use limits::{GpuLimits, MAX_ATTRIBUTES};
pub use texture::Texture;
pub use uniform::{UniformValue, Uniforms};
