//! Command execution: the interpreter and the pipeline stages it drives.
//!
//! Call chain (data flows strictly downward):
//!
//! ```text
//! execute_into
//!  ├─ clear                      framebuffer color/depth planes
//!  └─ draw                       one call per Draw command
//!      └─ run_vertex_assembly    one call per triangle
//!          ├─ compute_vertex_id
//!          ├─ read_attributes
//!          └─ VertexShader::run  -> OutVertex -> TriangleSink
//! ```

mod assembly;
mod attributes;
mod clear;
mod draw;
mod index;
mod interpreter;

pub use assembly::{Triangle, TriangleSink, run_vertex_assembly};
pub use attributes::read_attributes;
pub use clear::clear;
pub use draw::draw;
pub use index::compute_vertex_id;
pub use interpreter::{ExecStats, execute, execute_into};
