//! Include resolution and stage macro injection over the lexer's tokens.

use std::fs;
use std::path::{Path, PathBuf};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::graphics_device::ShaderStage;
use crate::shader::read_text_file;
use super::lexer::{self, Token};

/// Preprocess `source_text` for `stage`.
///
/// Relative include paths resolve against `base_directory` at the top
/// level and against the including file's directory below that. Every
/// occurrence of an include is expanded, including repeats; a file that
/// includes itself, directly or through others, fails with
/// `Error::IncludeCycle`. A missing include fails with
/// `Error::FileReadFailure` for that path and no output is produced.
///
/// If the source has no `#version` line, no macro is injected.
pub fn preprocess(source_text: &str, stage: ShaderStage, base_directory: &Path) -> Result<String> {
    preprocess_with_origin(source_text, stage, base_directory, None)
}

/// Same as `preprocess`, with the file the text came from seeding the
/// inclusion stack.
pub(crate) fn preprocess_with_origin(
    source_text: &str,
    stage: ShaderStage,
    base_directory: &Path,
    origin: Option<&Path>,
) -> Result<String> {
    let mut processor = Processor::default();
    if let Some(origin) = origin {
        processor.enter(canonical(origin));
    }

    let mut out = String::with_capacity(source_text.len() + 32);
    processor.expand(source_text, base_directory, origin, Some(stage), &mut out)?;
    Ok(out)
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Inclusion stack of the expansion in progress
#[derive(Default)]
struct Processor {
    stack: Vec<PathBuf>,
    on_stack: FxHashSet<PathBuf>,
}

impl Processor {
    fn enter(&mut self, file: PathBuf) {
        self.on_stack.insert(file.clone());
        self.stack.push(file);
    }

    fn leave(&mut self) {
        if let Some(file) = self.stack.pop() {
            self.on_stack.remove(&file);
        }
    }

    /// Append the expansion of `text` to `out`. `inject` is only set for
    /// the top-level source: version lines of included files stay as is.
    fn expand(
        &mut self,
        text: &str,
        directory: &Path,
        file: Option<&Path>,
        mut inject: Option<ShaderStage>,
        out: &mut String,
    ) -> Result<()> {
        let tokens = lexer::tokenize(text).map_err(|malformed| {
            let file = file.map(Path::to_path_buf).unwrap_or_default();
            crate::starter_error!(
                "glstarter::shader",
                "Malformed include directive at {}:{}",
                file.display(),
                malformed.line
            );
            Error::MalformedInclude { file, line: malformed.line }
        })?;

        for token in tokens {
            match token {
                Token::Version { text } => {
                    out.push_str(text);
                    if let Some(stage) = inject.take() {
                        if !text.ends_with('\n') {
                            out.push('\n');
                        }
                        out.push_str("#define ");
                        out.push_str(stage.macro_name());
                        out.push('\n');
                    }
                }
                Token::Include { path, line_ending, line, .. } => {
                    let target = directory.join(path);
                    let content = read_text_file(&target).inspect_err(|e| {
                        crate::starter_error!("glstarter::shader", "Include at line {} failed: {}", line, e);
                    })?;

                    let key = canonical(&target);
                    if self.on_stack.contains(&key) {
                        let mut chain = self.stack.clone();
                        chain.push(key);
                        let err = Error::IncludeCycle { chain };
                        crate::starter_error!("glstarter::shader", "{}", err);
                        return Err(err);
                    }

                    crate::starter_trace!(
                        "glstarter::shader",
                        "Including '{}' (depth {})",
                        target.display(),
                        self.stack.len()
                    );

                    let child_directory = target.parent().map(Path::to_path_buf).unwrap_or_default();
                    self.enter(key);
                    self.expand(&content, &child_directory, Some(&target), None, out)?;
                    self.leave();
                    out.push_str(line_ending);
                }
                Token::Text { .. } => token.push_to(out),
            }
        }

        Ok(())
    }
}
