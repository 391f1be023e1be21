/// GraphicsDevice trait - the driver calls the shader pipeline is built on

use crate::error::Result;
use crate::graphics_device::{
    ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};

// ============================================================================
// Configuration
// ============================================================================

/// Window and context configuration consumed by a backend
#[derive(Debug, Clone)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Requested GL version (major, minor), core profile
    pub version: (u8, u8),
    /// Wait for vertical blank on buffer swap
    pub vsync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "GL Starter".to_string(),
            width: 900,
            height: 600,
            version: (4, 3),
            vsync: true,
        }
    }
}

impl Config {
    /// Width / height of the initial window.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// GPU driver interface
///
/// Implemented by backend-specific devices (e.g., OpenGlGraphicsDevice).
/// Every call must happen on the thread that owns the current context,
/// which is why the trait is neither `Send` nor `Sync`.
///
/// Status and log queries are separate from the commands that produce
/// them, matching the driver model: compile, then ask whether it worked.
pub trait GraphicsDevice {
    /// Create an empty shader object for `stage`
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle>;

    /// Replace the source text of a shader object
    fn shader_source(&mut self, shader: ShaderHandle, source: &str);

    /// Compile the current source of a shader object
    fn compile_shader(&mut self, shader: ShaderHandle);

    /// Whether the last compilation succeeded
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Compiler output for the last compilation (may be empty)
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    /// Release a shader object
    fn delete_shader(&mut self, shader: ShaderHandle);

    /// Create an empty program object
    fn create_program(&mut self) -> Result<ProgramHandle>;

    /// Attach a compiled shader object to a program
    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    /// Link all attached shader objects
    fn link_program(&mut self, program: ProgramHandle);

    /// Whether the last link succeeded
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Linker output for the last link (may be empty)
    fn program_info_log(&self, program: ProgramHandle) -> String;

    /// Release a program object
    fn delete_program(&mut self, program: ProgramHandle);

    /// Make `program` current for draw/dispatch, or unbind with `None`
    fn use_program(&mut self, program: Option<ProgramHandle>);

    /// Location of an active uniform, `None` when the name is not active
    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation>;

    /// Write a uniform of `program`; must not disturb any other program
    fn set_uniform(&mut self, program: ProgramHandle, location: UniformLocation, value: UniformValue);

    /// Index of a shader storage block, `None` when the block is not active
    fn storage_block_index(&self, program: ProgramHandle, name: &str) -> Option<u32>;

    /// Bind a shader storage block to a buffer binding point
    fn storage_block_binding(&mut self, program: ProgramHandle, block_index: u32, binding: u32);
}
