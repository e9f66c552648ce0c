//! Shader-facing types: vertex/fragment records, the shader interface,
//! programs and the texture sampler.

mod attribute;
mod interface;
mod program;
mod sampler;

pub use attribute::{AttributeFormat, AttributeValue, InFragment, InVertex, OutFragment, OutVertex};
pub use interface::ShaderInterface;
pub use program::{FragmentShader, Program, VertexShader};
pub use sampler::read_texture;
