//! Command buffer types.
//!
//! Extending the command set:
//! - add a payload struct to `command.rs` and a variant to [`Command`]
//! - add a `push_*` helper to [`CommandBuffer`]
//! - dispatch the variant in `exec::interpreter`

mod buffer;
mod command;
mod vertex_array;

pub use buffer::CommandBuffer;
pub use command::{ClearCommand, Command, DrawCommand};
pub use vertex_array::{IndexBinding, IndexType, VertexArray, VertexAttrib};
