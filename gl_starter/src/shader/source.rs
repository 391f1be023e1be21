/// FileLoader and ShaderSource
///
/// A `ShaderSource` is the immutable text of one file plus the directory
/// its relative includes resolve against. Preprocessing derives new
/// strings from it and never mutates it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::graphics_device::ShaderStage;

/// Read a whole text file.
///
/// An empty file is `Ok("")`; a missing, unreadable or non-UTF-8 file is
/// `Error::FileReadFailure` naming the path. The handle is closed before
/// returning.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::FileReadFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Raw shader text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    text: String,
    directory: PathBuf,
    path: Option<PathBuf>,
}

impl ShaderSource {
    /// Load a source file; includes resolve against its parent directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_text_file(path)?;
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        crate::starter_debug!("glstarter::shader", "Loaded '{}' ({} bytes)", path.display(), text.len());

        Ok(Self {
            text,
            directory,
            path: Some(path.to_path_buf()),
        })
    }

    /// Build a source from memory; includes resolve against `directory`.
    pub fn from_text(text: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            directory: directory.into(),
            path: None,
        }
    }

    /// Unprocessed source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Directory relative includes resolve against.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File the source was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Derive the compilation unit for `stage`.
    pub fn preprocess(&self, stage: ShaderStage) -> Result<String> {
        super::preprocessor::preprocess_with_origin(
            &self.text,
            stage,
            &self.directory,
            self.path.as_deref(),
        )
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
