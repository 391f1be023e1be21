/// Uniform values and locations

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// Driver-assigned location of an active uniform inside one program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Typed value written into a program uniform
///
/// Booleans and texture slots are written as integers, the same way
/// the driver stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
    /// Texture unit index a sampler reads from
    TextureSlot(i32),
}

impl UniformValue {
    /// GLSL type name, for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            UniformValue::Bool(_) => "bool",
            UniformValue::Int(_) => "int",
            UniformValue::Float(_) => "float",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::Mat3(_) => "mat3",
            UniformValue::Mat4(_) => "mat4",
            UniformValue::TextureSlot(_) => "sampler",
        }
    }
}
