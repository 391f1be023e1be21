/// ShaderCompiler - compile preprocessed stage sources and link them into a program
///
/// Diagnostics are best-effort, not fail-fast: every stage is compiled even
/// after one failed, and the program is linked from whatever compiled, so a
/// single build reports everything the driver has to say.

use std::fmt;

use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsContext, ShaderHandle, ShaderStage};
use crate::shader::Program;

/// Upper bound, in bytes, of a captured compiler or linker log
pub const MAX_INFO_LOG_LENGTH: usize = 1024;

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTarget {
    /// Compilation of one stage
    Stage(ShaderStage),
    /// Linking of the program
    Program,
}

impl fmt::Display for DiagnosticTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticTarget::Stage(stage) => f.write_str(stage.macro_name()),
            DiagnosticTarget::Program => f.write_str("PROGRAM"),
        }
    }
}

/// Driver output for a failed compile or link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDiagnostic {
    pub target: DiagnosticTarget,
    /// Driver log, at most `MAX_INFO_LOG_LENGTH` bytes
    pub log: String,
}

impl ShaderDiagnostic {
    pub fn new(target: DiagnosticTarget, log: impl Into<String>) -> Self {
        Self { target, log: log.into() }
    }
}

impl fmt::Display for ShaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.log.trim_end())
    }
}

/// Preprocessed sources of one program
///
/// Only two shapes exist: a vertex + fragment pair, or a lone compute stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSources {
    Graphics { vertex: String, fragment: String },
    Compute { compute: String },
}

impl ProgramSources {
    /// Stages in compile order.
    pub fn stages(&self) -> Vec<(ShaderStage, &str)> {
        match self {
            ProgramSources::Graphics { vertex, fragment } => vec![
                (ShaderStage::Vertex, vertex.as_str()),
                (ShaderStage::Fragment, fragment.as_str()),
            ],
            ProgramSources::Compute { compute } => vec![(ShaderStage::Compute, compute.as_str())],
        }
    }
}

/// Intermediate shader object, deleted when dropped
struct StageObject {
    handle: ShaderHandle,
    context: GraphicsContext,
}

impl Drop for StageObject {
    fn drop(&mut self) {
        self.context.device().delete_shader(self.handle);
    }
}

/// Cut a driver log down to `MAX_INFO_LOG_LENGTH` bytes on a char boundary.
fn bounded_log(mut log: String) -> String {
    if log.len() > MAX_INFO_LOG_LENGTH {
        let mut end = MAX_INFO_LOG_LENGTH;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    log
}

/// Compile every stage of `sources` and link them into a program.
///
/// Returns the linked `Program`, or `Error::ShaderBuildFailed` carrying one
/// diagnostic per failed stage plus a `PROGRAM` diagnostic if linking
/// failed. Intermediate shader objects are deleted on every path, and the
/// program object is released when the build fails.
pub fn build_program(context: &GraphicsContext, sources: &ProgramSources) -> Result<Program> {
    let mut diagnostics = Vec::new();
    let mut compiled = Vec::new();

    for (stage, source) in sources.stages() {
        let handle = context.device().create_shader(stage).inspect_err(|e| {
            crate::starter_error!("glstarter::shader", "Failed to create {} shader: {}", stage, e);
        })?;
        let stage_object = StageObject { handle, context: context.clone() };

        {
            let mut device = context.device();
            device.shader_source(handle, source);
            device.compile_shader(handle);
        }

        let success = context.device().shader_compile_status(handle);
        if success {
            crate::starter_debug!("glstarter::shader", "{} stage compiled", stage);
            compiled.push(stage_object);
        } else {
            let log = bounded_log(context.device().shader_info_log(handle));
            crate::starter_error!("glstarter::shader", "{} stage failed to compile:\n{}", stage, log.trim_end());
            diagnostics.push(ShaderDiagnostic::new(DiagnosticTarget::Stage(stage), log));
        }
    }

    let handle = context.device().create_program().inspect_err(|e| {
        crate::starter_error!("glstarter::shader", "Failed to create program: {}", e);
    })?;
    let program = Program::from_handle(context.clone(), handle);

    {
        let mut device = context.device();
        for stage_object in &compiled {
            device.attach_shader(handle, stage_object.handle);
        }
        device.link_program(handle);
    }

    let linked = context.device().program_link_status(handle);
    if !linked {
        let log = bounded_log(context.device().program_info_log(handle));
        crate::starter_error!("glstarter::shader", "Program {} failed to link:\n{}", handle, log.trim_end());
        diagnostics.push(ShaderDiagnostic::new(DiagnosticTarget::Program, log));
    }

    // Linked programs keep their own copy of the code
    drop(compiled);

    if diagnostics.is_empty() {
        crate::starter_debug!("glstarter::shader", "Program {} linked", handle);
        Ok(program)
    } else {
        Err(Error::ShaderBuildFailed(diagnostics))
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
