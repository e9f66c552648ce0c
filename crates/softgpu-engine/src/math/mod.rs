//! Small math types shared by memory, shaders and commands.
//!
//! All vector types are `#[repr(C)]` + `Pod` so they can be decoded straight
//! out of buffer bytes by [`crate::memory::BufferView`].

mod color;
mod vec;

pub use color::ColorRgba;
pub use vec::{Mat4, Vec2, Vec3, Vec4};
