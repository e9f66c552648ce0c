use crate::math::{Vec2, Vec3, Vec4};
use crate::memory::MAX_ATTRIBUTES;

/// Component layout of one vertex attribute: 1 to 4 consecutive `f32`s.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttributeFormat {
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeFormat {
    #[inline]
    pub const fn components(self) -> u32 {
        match self {
            AttributeFormat::Float => 1,
            AttributeFormat::Vec2 => 2,
            AttributeFormat::Vec3 => 3,
            AttributeFormat::Vec4 => 4,
        }
    }

    #[inline]
    pub const fn byte_size(self) -> u64 {
        self.components() as u64 * 4
    }
}

/// Tagged attribute value carried by in/out vertices and fragments.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum AttributeValue {
    #[default]
    Unset,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl AttributeValue {
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, AttributeValue::Unset)
    }

    pub fn format(&self) -> Option<AttributeFormat> {
        match self {
            AttributeValue::Unset => None,
            AttributeValue::Float(_) => Some(AttributeFormat::Float),
            AttributeValue::Vec2(_) => Some(AttributeFormat::Vec2),
            AttributeValue::Vec3(_) => Some(AttributeFormat::Vec3),
            AttributeValue::Vec4(_) => Some(AttributeFormat::Vec4),
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            AttributeValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match *self {
            AttributeValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            AttributeValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match *self {
            AttributeValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any set value to four components, padding with `(0, 0, 0, 1)`.
    pub fn to_vec4(&self) -> Option<Vec4> {
        match *self {
            AttributeValue::Unset => None,
            AttributeValue::Float(x) => Some(Vec4::new(x, 0.0, 0.0, 1.0)),
            AttributeValue::Vec2(v) => Some(Vec4::new(v.x, v.y, 0.0, 1.0)),
            AttributeValue::Vec3(v) => Some(v.extend(1.0)),
            AttributeValue::Vec4(v) => Some(v),
        }
    }
}

/// Input of one vertex-shader invocation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InVertex {
    /// Resolved vertex index (after index-buffer lookup).
    pub gl_vertex_id: u32,
    /// Sequence number of the draw command within its command buffer.
    pub gl_draw_id: u32,
    pub attributes: [AttributeValue; MAX_ATTRIBUTES],
}

/// Output of one vertex-shader invocation, consumed by primitive assembly
/// and later stages.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutVertex {
    /// Clip-space position.
    pub gl_position: Vec4,
    pub attributes: [AttributeValue; MAX_ATTRIBUTES],
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            gl_position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            attributes: [AttributeValue::Unset; MAX_ATTRIBUTES],
        }
    }
}

/// Input of one fragment-shader invocation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InFragment {
    /// Window-space `(x, y)`, depth in `z`.
    pub gl_frag_coord: Vec4,
    pub attributes: [AttributeValue; MAX_ATTRIBUTES],
}

/// Output of one fragment-shader invocation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OutFragment {
    pub gl_frag_color: Vec4,
    /// Overrides the interpolated depth when set.
    pub gl_frag_depth: Option<f32>,
    pub discard: bool,
}
