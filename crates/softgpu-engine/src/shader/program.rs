use std::fmt;

use crate::memory::MAX_ATTRIBUTES;

use super::{AttributeFormat, InFragment, InVertex, OutFragment, OutVertex, ShaderInterface};

/// Vertex stage of a program.
///
/// Implemented for any `Fn(&InVertex, &ShaderInterface) -> OutVertex`, so
/// plain closures can be bound directly.
pub trait VertexShader {
    fn run(&self, input: &InVertex, si: &ShaderInterface<'_>) -> OutVertex;
}

impl<F> VertexShader for F
where
    F: Fn(&InVertex, &ShaderInterface<'_>) -> OutVertex,
{
    #[inline]
    fn run(&self, input: &InVertex, si: &ShaderInterface<'_>) -> OutVertex {
        self(input, si)
    }
}

/// Fragment stage of a program. Carried for downstream stages; the command
/// interpreter never invokes it.
pub trait FragmentShader {
    fn run(&self, input: &InFragment, si: &ShaderInterface<'_>) -> OutFragment;
}

impl<F> FragmentShader for F
where
    F: Fn(&InFragment, &ShaderInterface<'_>) -> OutFragment,
{
    #[inline]
    fn run(&self, input: &InFragment, si: &ShaderInterface<'_>) -> OutFragment {
        self(input, si)
    }
}

/// Shader program stored in the memory image.
pub struct Program {
    vertex_shader: Box<dyn VertexShader>,
    fragment_shader: Option<Box<dyn FragmentShader>>,
    /// Formats of the attributes the vertex stage hands to the fragment stage.
    vs2fs: [Option<AttributeFormat>; MAX_ATTRIBUTES],
}

impl Program {
    pub fn new(vertex_shader: impl VertexShader + 'static) -> Self {
        Self {
            vertex_shader: Box::new(vertex_shader),
            fragment_shader: None,
            vs2fs: [None; MAX_ATTRIBUTES],
        }
    }

    pub fn with_fragment_shader(mut self, fragment_shader: impl FragmentShader + 'static) -> Self {
        self.fragment_shader = Some(Box::new(fragment_shader));
        self
    }

    /// Declares the format of varying `slot`. Slots beyond
    /// [`MAX_ATTRIBUTES`] are ignored.
    pub fn with_varying(mut self, slot: usize, format: AttributeFormat) -> Self {
        if let Some(entry) = self.vs2fs.get_mut(slot) {
            *entry = Some(format);
        } else {
            log::warn!("Program: varying slot {slot} out of range, ignored");
        }
        self
    }

    #[inline]
    pub fn vertex_shader(&self) -> &dyn VertexShader {
        self.vertex_shader.as_ref()
    }

    #[inline]
    pub fn fragment_shader(&self) -> Option<&dyn FragmentShader> {
        self.fragment_shader.as_deref()
    }

    #[inline]
    pub fn vs2fs(&self) -> &[Option<AttributeFormat>; MAX_ATTRIBUTES] {
        &self.vs2fs
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("fragment_shader", &self.fragment_shader.is_some())
            .field("vs2fs", &self.vs2fs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;
    use crate::memory::Uniforms;

    #[test]
    fn closure_runs_as_vertex_shader() {
        let prg = Program::new(|v: &InVertex, _: &ShaderInterface<'_>| OutVertex {
            gl_position: Vec4::new(v.gl_vertex_id as f32, 0.0, 0.0, 1.0),
            ..OutVertex::default()
        });
        let uniforms = Uniforms::new(0);
        let si = ShaderInterface::new(&uniforms, &[]);
        let input = InVertex { gl_vertex_id: 3, ..InVertex::default() };
        assert_eq!(prg.vertex_shader().run(&input, &si).gl_position.x, 3.0);
        assert!(prg.fragment_shader().is_none());
    }

    #[test]
    fn varyings_are_recorded() {
        let prg = Program::new(|_: &InVertex, _: &ShaderInterface<'_>| OutVertex::default())
            .with_varying(2, AttributeFormat::Vec3)
            .with_varying(MAX_ATTRIBUTES, AttributeFormat::Float);
        assert_eq!(prg.vs2fs()[2], Some(AttributeFormat::Vec3));
        assert_eq!(prg.vs2fs().iter().flatten().count(), 1);
    }

    #[test]
    fn fragment_shader_is_kept() {
        let prg = Program::new(|_: &InVertex, _: &ShaderInterface<'_>| OutVertex::default())
            .with_fragment_shader(|_: &InFragment, _: &ShaderInterface<'_>| OutFragment {
                gl_frag_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
                ..OutFragment::default()
            });
        let uniforms = Uniforms::new(0);
        let si = ShaderInterface::new(&uniforms, &[]);
        let out = prg.fragment_shader().unwrap().run(&InFragment::default(), &si);
        assert_eq!(out.gl_frag_color.w, 1.0);
    }
}
