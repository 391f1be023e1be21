/// UniformBinder - named uniform writes on a program
///
/// Names that are not active in the linked program (never declared,
/// misspelled, or optimized away by the driver) are accepted and the
/// write does nothing. Callers do not need to know in advance which
/// uniforms survived linking.

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::graphics_device::{UniformLocation, UniformValue};
use crate::shader::Program;

impl Program {
    /// Location of an active uniform.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.context().device().uniform_location(self.handle(), name)
    }

    /// Write `value` into the uniform `name` of this program only.
    pub fn set_uniform(&self, name: &str, value: UniformValue) {
        let location = self.uniform_location(name);
        match location {
            Some(location) => self.context().device().set_uniform(self.handle(), location, value),
            None => crate::starter_trace!(
                "glstarter::shader",
                "Program {} has no active {} uniform '{}', write ignored",
                self.handle(),
                value.type_name(),
                name
            ),
        }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_uniform(name, UniformValue::Bool(value));
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, UniformValue::Int(value));
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, UniformValue::Float(value));
    }

    pub fn set_vec2(&self, name: &str, value: Vec2) {
        self.set_uniform(name, UniformValue::Vec2(value));
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set_uniform(name, UniformValue::Vec3(value));
    }

    pub fn set_vec4(&self, name: &str, value: Vec4) {
        self.set_uniform(name, UniformValue::Vec4(value));
    }

    pub fn set_mat3(&self, name: &str, value: &Mat3) {
        self.set_uniform(name, UniformValue::Mat3(*value));
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        self.set_uniform(name, UniformValue::Mat4(*value));
    }

    /// Point the sampler `name` at texture unit `slot`.
    pub fn set_texture(&self, name: &str, slot: i32) {
        self.set_uniform(name, UniformValue::TextureSlot(slot));
    }

    /// Bind the shader storage block `name` to buffer binding point `binding`.
    pub fn set_storage_block(&self, name: &str, binding: u32) {
        let index = self.context().device().storage_block_index(self.handle(), name);
        match index {
            Some(index) => self.context().device().storage_block_binding(self.handle(), index, binding),
            None => crate::starter_trace!(
                "glstarter::shader",
                "Program {} has no active storage block '{}', binding ignored",
                self.handle(),
                name
            ),
        }
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
