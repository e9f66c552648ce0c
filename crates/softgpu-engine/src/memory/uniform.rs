use crate::error::{GpuError, ResourceKind, Result};
use crate::math::{Mat4, Vec2, Vec3, Vec4};

/// One uniform slot.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum UniformValue {
    #[default]
    Unset,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    UInt(u32),
    Int(i32),
    Mat4(Mat4),
}

impl UniformValue {
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match *self {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<Mat4> {
        match *self {
            UniformValue::Mat4(m) => Some(m),
            _ => None,
        }
    }
}

/// Fixed-size uniform storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniforms {
    slots: Vec<UniformValue>,
}

impl Uniforms {
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![UniformValue::Unset; capacity] }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reads slot `index`. In-range slots never written read as
    /// [`UniformValue::Unset`].
    pub fn get(&self, index: usize) -> Result<UniformValue> {
        self.slots.get(index).copied().ok_or_else(|| self.out_of_range(index))
    }

    pub fn set(&mut self, index: usize, value: UniformValue) -> Result<()> {
        let err = self.out_of_range(index);
        let slot = self.slots.get_mut(index).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> GpuError {
        GpuError::IdOutOfRange {
            kind: ResourceKind::Uniform,
            id: u32::try_from(index).unwrap_or(u32::MAX),
            limit: self.slots.len(),
        }
    }
}
