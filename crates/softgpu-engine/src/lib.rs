//! Software GPU engine.
//!
//! Emulates the memory model and fixed-sequence execution of a simple GPU:
//! a [`CommandBuffer`](cmd::CommandBuffer) is interpreted against a
//! [`GpuMemory`](memory::GpuMemory) image, clearing the framebuffer and
//! running vertex shaders over triangle lists.
//!
//! ```
//! use softgpu_engine::cmd::CommandBuffer;
//! use softgpu_engine::exec::execute;
//! use softgpu_engine::math::ColorRgba;
//! use softgpu_engine::memory::{Framebuffer, GpuLimits, GpuMemory};
//!
//! let fb = Framebuffer::new(2, 2, 4).unwrap();
//! let mut mem = GpuMemory::new(GpuLimits::default(), fb);
//!
//! let mut cb = CommandBuffer::new();
//! cb.push_clear_color(ColorRgba::new(1.0, 0.0, 0.0, 1.0));
//! execute(&mut mem, &cb).unwrap();
//!
//! assert_eq!(mem.framebuffer().pixel(1, 1), Some(&[255u8, 0, 0, 255][..]));
//! ```

pub mod cmd;
pub mod error;
pub mod exec;
pub mod logging;
pub mod math;
pub mod memory;
pub mod shader;

pub use error::{GpuError, Result};
