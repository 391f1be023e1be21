//! Shader module: source loading, preprocessing, program building and uniforms.
//!
//! Data flow: `read_text_file` → `preprocess` (one pass per stage) →
//! `build_program` → `Program` (uniform writes per frame).
//! `Shader` bundles the whole chain for the common cases.

mod source;
mod preprocessor;
mod compiler;
mod program;
mod uniform;
mod shader;

pub use source::{read_text_file, ShaderSource};
pub use preprocessor::preprocess;
pub use compiler::{
    build_program, ProgramSources, ShaderDiagnostic, DiagnosticTarget, MAX_INFO_LOG_LENGTH,
};
pub use program::Program;
pub use shader::{Shader, ProgramKind};
