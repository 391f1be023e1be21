/// OpenGlGraphicsDevice - glow implementation of the GraphicsDevice trait
///
/// Thin mapping from the device calls to OpenGL entry points. The glow
/// context must be current on the calling thread; `OpenGlWindow` takes
/// care of that for the demo.

use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;
use gl_starter::glstarter::render::{
    GraphicsDevice, ProgramHandle, ShaderHandle, ShaderStage, UniformLocation, UniformValue,
};
use gl_starter::glstarter::Result;
use gl_starter::{starter_err, starter_trace};

/// OpenGL device over a shared glow context
pub struct OpenGlGraphicsDevice {
    gl: Rc<glow::Context>,
}

impl OpenGlGraphicsDevice {
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self { gl }
    }

    /// Raw glow context.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

// ===== HANDLE CONVERSIONS =====

fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Compute => glow::COMPUTE_SHADER,
    }
}

fn native_shader(shader: ShaderHandle) -> Option<glow::NativeShader> {
    NonZeroU32::new(shader.0).map(glow::NativeShader)
}

fn native_program(program: ProgramHandle) -> Option<glow::NativeProgram> {
    NonZeroU32::new(program.0).map(glow::NativeProgram)
}

fn native_location(location: UniformLocation) -> glow::NativeUniformLocation {
    glow::NativeUniformLocation(location.0)
}

impl OpenGlGraphicsDevice {
    /// Run `f` with `program` bound, then restore whatever was bound before.
    fn with_program_bound(&self, program: glow::NativeProgram, f: impl FnOnce(&glow::Context)) {
        unsafe {
            let previous = NonZeroU32::new(self.gl.get_parameter_i32(glow::CURRENT_PROGRAM) as u32)
                .map(glow::NativeProgram);
            if previous != Some(program) {
                self.gl.use_program(Some(program));
            }
            f(&self.gl);
            if previous != Some(program) {
                self.gl.use_program(previous);
            }
        }
    }
}

impl GraphicsDevice for OpenGlGraphicsDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle> {
        let shader = unsafe { self.gl.create_shader(gl_stage(stage)) }
            .map_err(|e| starter_err!("glstarter::opengl", "Failed to create {} shader: {}", stage, e))?;
        Ok(ShaderHandle(shader.0.get()))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.shader_source(shader, source) };
        }
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.compile_shader(shader) };
        }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        native_shader(shader)
            .map(|shader| unsafe { self.gl.get_shader_compile_status(shader) })
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        native_shader(shader)
            .map(|shader| unsafe { self.gl.get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        if let Some(shader) = native_shader(shader) {
            unsafe { self.gl.delete_shader(shader) };
        }
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let program = unsafe { self.gl.create_program() }
            .map_err(|e| starter_err!("glstarter::opengl", "Failed to create program: {}", e))?;
        Ok(ProgramHandle(program.0.get()))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        if let (Some(program), Some(shader)) = (native_program(program), native_shader(shader)) {
            unsafe { self.gl.attach_shader(program, shader) };
        }
    }

    fn link_program(&mut self, program: ProgramHandle) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl.link_program(program) };
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        native_program(program)
            .map(|program| unsafe { self.gl.get_program_link_status(program) })
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        native_program(program)
            .map(|program| unsafe { self.gl.get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl.delete_program(program) };
        }
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        let program = program.and_then(native_program);
        unsafe { self.gl.use_program(program) };
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        let program = native_program(program)?;
        unsafe { self.gl.get_uniform_location(program, name) }.map(|location| UniformLocation(location.0))
    }

    fn set_uniform(&mut self, program: ProgramHandle, location: UniformLocation, value: UniformValue) {
        let Some(program) = native_program(program) else {
            return;
        };
        let location = native_location(location);
        let location = Some(&location);

        self.with_program_bound(program, |gl| unsafe {
            match value {
                UniformValue::Bool(v) => gl.uniform_1_i32(location, v as i32),
                UniformValue::Int(v) | UniformValue::TextureSlot(v) => gl.uniform_1_i32(location, v),
                UniformValue::Float(v) => gl.uniform_1_f32(location, v),
                UniformValue::Vec2(v) => gl.uniform_2_f32(location, v.x, v.y),
                UniformValue::Vec3(v) => gl.uniform_3_f32(location, v.x, v.y, v.z),
                UniformValue::Vec4(v) => gl.uniform_4_f32(location, v.x, v.y, v.z, v.w),
                UniformValue::Mat3(m) => gl.uniform_matrix_3_f32_slice(location, false, &m.to_cols_array()),
                UniformValue::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, false, &m.to_cols_array()),
            }
        });
    }

    fn storage_block_index(&self, program: ProgramHandle, name: &str) -> Option<u32> {
        let program = native_program(program)?;
        let index = unsafe { self.gl.get_shader_storage_block_index(program, name) };
        if index.is_none() {
            starter_trace!("glstarter::opengl", "No storage block '{}' in program {}", name, program.0);
        }
        index
    }

    fn storage_block_binding(&mut self, program: ProgramHandle, block_index: u32, binding: u32) {
        if let Some(program) = native_program(program) {
            unsafe { self.gl.shader_storage_block_binding(program, block_index, binding) };
        }
    }
}
