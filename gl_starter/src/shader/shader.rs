/// Shader - load, preprocess and build a program in one call
///
/// Two layouts are supported:
/// - one file per stage (`from_files`)
/// - a single annotated file whose stages are selected with
///   `#ifdef VERTEX` / `#ifdef FRAGMENT` / `#ifdef COMPUTE`
///   (`from_annotated_file`, `compute_from_file`)

use std::path::Path;
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::error::Result;
use crate::graphics_device::{GraphicsContext, ShaderStage, UniformValue};
use crate::shader::{build_program, Program, ProgramSources, ShaderSource};

/// Program shape to derive from an annotated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramKind {
    /// Vertex + fragment
    Graphics,
    /// Compute only
    Compute,
}

/// A built program plus the convenience setters the render loop uses
#[derive(Debug)]
pub struct Shader {
    program: Program,
}

impl Shader {
    /// Build a graphics program from a vertex file and a fragment file.
    ///
    /// Each file is preprocessed for its own stage, so both may use
    /// includes and the stage macros.
    pub fn from_files(
        context: &GraphicsContext,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vertex = ShaderSource::load(vertex_path)?.preprocess(ShaderStage::Vertex)?;
        let fragment = ShaderSource::load(fragment_path)?.preprocess(ShaderStage::Fragment)?;
        Self::from_sources(context, &ProgramSources::Graphics { vertex, fragment })
    }

    /// Build a program from one annotated file, preprocessed once per stage.
    pub fn from_annotated_file(
        context: &GraphicsContext,
        path: impl AsRef<Path>,
        kind: ProgramKind,
    ) -> Result<Self> {
        let source = ShaderSource::load(path)?;
        let sources = match kind {
            ProgramKind::Graphics => ProgramSources::Graphics {
                vertex: source.preprocess(ShaderStage::Vertex)?,
                fragment: source.preprocess(ShaderStage::Fragment)?,
            },
            ProgramKind::Compute => ProgramSources::Compute {
                compute: source.preprocess(ShaderStage::Compute)?,
            },
        };
        Self::from_sources(context, &sources)
    }

    /// Build a compute program from one file.
    pub fn compute_from_file(context: &GraphicsContext, path: impl AsRef<Path>) -> Result<Self> {
        Self::from_annotated_file(context, path, ProgramKind::Compute)
    }

    /// Build from already preprocessed sources.
    pub fn from_sources(context: &GraphicsContext, sources: &ProgramSources) -> Result<Self> {
        let program = build_program(context, sources)?;
        Ok(Self { program })
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Driver handle of the program as a raw integer.
    pub fn id(&self) -> u32 {
        self.program.id()
    }

    /// Activate the program.
    pub fn use_program(&self) {
        self.program.use_program();
    }

    // ===== UNIFORMS =====

    pub fn set_uniform(&self, name: &str, value: UniformValue) {
        self.program.set_uniform(name, value);
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.program.set_bool(name, value);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.program.set_int(name, value);
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.program.set_float(name, value);
    }

    pub fn set_vec2(&self, name: &str, value: Vec2) {
        self.program.set_vec2(name, value);
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.program.set_vec3(name, value);
    }

    pub fn set_vec4(&self, name: &str, value: Vec4) {
        self.program.set_vec4(name, value);
    }

    pub fn set_mat3(&self, name: &str, value: &Mat3) {
        self.program.set_mat3(name, value);
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        self.program.set_mat4(name, value);
    }

    pub fn set_texture(&self, name: &str, slot: i32) {
        self.program.set_texture(name, slot);
    }

    pub fn set_storage_block(&self, name: &str, binding: u32) {
        self.program.set_storage_block(name, binding);
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
