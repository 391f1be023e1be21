//! Shader source preprocessor
//!
//! Turns one annotated source into the compilation unit of a single stage:
//! - `#define VERTEX|FRAGMENT|COMPUTE` injected after the `#version` line
//! - `#include "relative/path"` replaced by the file content, recursively,
//!   with include cycle detection

mod lexer;
mod processor;

pub use processor::preprocess;
pub(crate) use processor::preprocess_with_origin;

#[cfg(test)]
#[path = "preprocessor_tests.rs"]
mod tests;
