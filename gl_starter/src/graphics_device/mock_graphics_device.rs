/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Behaves like a strict driver for the calls the shader pipeline makes:
/// - a stage whose source contains `#error` fails to compile
/// - linking fails for uncompiled stages, invalid stage combinations,
///   or when `fail_link` is set
/// - active uniforms and storage blocks are the ones declared in the
///   linked sources, with locations assigned in declaration order
///
/// State lives behind `Rc<RefCell<_>>` so a test keeps a view of it after
/// the device itself moved into a `GraphicsContext`.

use std::cell::RefCell;
use std::rc::Rc;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, ShaderStage, ShaderHandle, ProgramHandle, UniformLocation, UniformValue,
};

// ============================================================================
// Mock objects
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub source: String,
    pub compiled: bool,
    pub info_log: String,
}

#[derive(Debug, Clone, Default)]
pub struct MockProgram {
    pub attached: Vec<u32>,
    pub linked: bool,
    pub info_log: String,
    pub uniforms: FxHashMap<String, u32>,
    pub values: FxHashMap<u32, UniformValue>,
    pub storage_blocks: FxHashMap<String, u32>,
    pub block_bindings: FxHashMap<u32, u32>,
}

#[derive(Debug, Default)]
pub struct MockState {
    next_id: u32,
    pub shaders: FxHashMap<u32, MockShader>,
    pub programs: FxHashMap<u32, MockProgram>,
    pub deleted_shaders: Vec<u32>,
    pub deleted_programs: Vec<u32>,
    pub current_program: Option<u32>,
    /// Every compile request, in order
    pub compiled_sources: Vec<(ShaderStage, String)>,
    /// Force the next links to fail
    pub fail_link: bool,
    /// Make `create_program` return an error
    pub fail_create_program: bool,
}

impl MockState {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn live_shader_count(&self) -> usize {
        self.shaders.len()
    }

    pub fn live_program_count(&self) -> usize {
        self.programs.len()
    }

    pub fn uniform_value(&self, program: ProgramHandle, name: &str) -> Option<UniformValue> {
        let program = self.programs.get(&program.0)?;
        let location = program.uniforms.get(name)?;
        program.values.get(location).copied()
    }

    pub fn block_binding(&self, program: ProgramHandle, name: &str) -> Option<u32> {
        let program = self.programs.get(&program.0)?;
        let index = program.storage_blocks.get(name)?;
        program.block_bindings.get(index).copied()
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

pub struct MockGraphicsDevice {
    state: Rc<RefCell<MockState>>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::default())),
        }
    }

    /// Shared view of the device state
    pub fn state(&self) -> Rc<RefCell<MockState>> {
        self.state.clone()
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake driver compile: `#error <text>` lines become compile errors.
fn compile_source(source: &str) -> (bool, String) {
    let mut log = String::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(rest) = line.trim_start().strip_prefix("#error") {
            log.push_str(&format!("0:{}: error: {}\n", index + 1, rest.trim()));
        }
    }
    (log.is_empty(), log)
}

/// Names declared with the `uniform` qualifier (blocks excluded).
fn declared_uniforms(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let code = line.split("//").next().unwrap_or("");
        let tokens: Vec<&str> = code.split_whitespace().collect();
        let Some(pos) = tokens.iter().position(|t| *t == "uniform") else {
            continue;
        };
        if code.contains('{') {
            continue;
        }
        if let Some(name) = tokens.get(pos + 2) {
            let name = name.trim_end_matches(';');
            let name = name.split('[').next().unwrap_or(name);
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Names of `buffer` (shader storage) blocks.
fn declared_storage_blocks(source: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in source.lines() {
        let code = line.split("//").next().unwrap_or("");
        let tokens: Vec<&str> = code.split_whitespace().collect();
        if let Some(pos) = tokens.iter().position(|t| *t == "buffer") {
            if let Some(name) = tokens.get(pos + 1) {
                let name = name.trim_end_matches('{');
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle> {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.shaders.insert(id, MockShader {
            stage,
            source: String::new(),
            compiled: false,
            info_log: String::new(),
        });
        Ok(ShaderHandle(id))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader.0) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        let mut state = self.state.borrow_mut();
        let Some(s) = state.shaders.get_mut(&shader.0) else {
            return;
        };
        let (ok, log) = compile_source(&s.source);
        s.compiled = ok;
        s.info_log = log;
        let record = (s.stage, s.source.clone());
        state.compiled_sources.push(record);
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.state.borrow().shaders.get(&shader.0).map(|s| s.compiled).unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        self.state.borrow().shaders.get(&shader.0).map(|s| s.info_log.clone()).unwrap_or_default()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        let mut state = self.state.borrow_mut();
        if state.shaders.remove(&shader.0).is_some() {
            state.deleted_shaders.push(shader.0);
        }
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let mut state = self.state.borrow_mut();
        if state.fail_create_program {
            return Err(Error::BackendError("mock: out of program objects".to_string()));
        }
        let id = state.next_id();
        state.programs.insert(id, MockProgram::default());
        Ok(ProgramHandle(id))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.0) {
            p.attached.push(shader.0);
        }
    }

    fn link_program(&mut self, program: ProgramHandle) {
        let mut state = self.state.borrow_mut();
        let Some(attached) = state.programs.get(&program.0).map(|p| p.attached.clone()) else {
            return;
        };
        let shaders: Vec<MockShader> = attached
            .iter()
            .filter_map(|id| state.shaders.get(id).cloned())
            .collect();

        let has = |stage: ShaderStage| shaders.iter().any(|s| s.stage == stage);
        let error = if state.fail_link {
            Some("error: forced link failure".to_string())
        } else if shaders.is_empty() {
            Some("error: no shaders attached".to_string())
        } else if shaders.iter().any(|s| !s.compiled) {
            Some("error: attached shader is not compiled".to_string())
        } else if has(ShaderStage::Compute) && shaders.len() > 1 {
            Some("error: compute shader linked with other stages".to_string())
        } else if !has(ShaderStage::Compute) && !has(ShaderStage::Vertex) {
            Some("error: program has no vertex shader".to_string())
        } else if !has(ShaderStage::Compute) && !has(ShaderStage::Fragment) {
            Some("error: program has no fragment shader".to_string())
        } else {
            None
        };

        let Some(p) = state.programs.get_mut(&program.0) else {
            return;
        };
        p.uniforms.clear();
        p.storage_blocks.clear();
        match error {
            Some(log) => {
                p.linked = false;
                p.info_log = log;
            }
            None => {
                p.linked = true;
                p.info_log.clear();
                for shader in &shaders {
                    for name in declared_uniforms(&shader.source) {
                        let next = p.uniforms.len() as u32;
                        p.uniforms.entry(name).or_insert(next);
                    }
                    for name in declared_storage_blocks(&shader.source) {
                        let next = p.storage_blocks.len() as u32;
                        p.storage_blocks.entry(name).or_insert(next);
                    }
                }
            }
        }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.state.borrow().programs.get(&program.0).map(|p| p.linked).unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        self.state.borrow().programs.get(&program.0).map(|p| p.info_log.clone()).unwrap_or_default()
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        let mut state = self.state.borrow_mut();
        if state.programs.remove(&program.0).is_some() {
            state.deleted_programs.push(program.0);
            if state.current_program == Some(program.0) {
                state.current_program = None;
            }
        }
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        self.state.borrow_mut().current_program = program.map(|p| p.0);
    }

    fn uniform_location(&self, program: ProgramHandle, name: &str) -> Option<UniformLocation> {
        let state = self.state.borrow();
        let p = state.programs.get(&program.0)?;
        if !p.linked {
            return None;
        }
        p.uniforms.get(name).copied().map(UniformLocation)
    }

    fn set_uniform(&mut self, program: ProgramHandle, location: UniformLocation, value: UniformValue) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.0) {
            p.values.insert(location.0, value);
        }
    }

    fn storage_block_index(&self, program: ProgramHandle, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let p = state.programs.get(&program.0)?;
        if !p.linked {
            return None;
        }
        p.storage_blocks.get(name).copied()
    }

    fn storage_block_binding(&mut self, program: ProgramHandle, block_index: u32, binding: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.0) {
            p.block_bindings.insert(block_index, binding);
        }
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
