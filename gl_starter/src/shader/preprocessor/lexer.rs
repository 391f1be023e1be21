//! Line lexer for shader sources.
//!
//! Splits a source into one token per line. Pushing every token back with
//! `push_to` gives the input byte for byte, so anything the processor does
//! not rewrite passes through untouched.

/// One source line, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `#version ...` line, `text` includes its line ending
    Version { text: &'a str },
    /// `#include "path"` line
    Include {
        /// Path between the quotes
        path: &'a str,
        /// The directive itself, without line ending
        directive: &'a str,
        /// `"\n"`, `"\r\n"` or `""` on an unterminated last line
        line_ending: &'a str,
        /// 1-based line number
        line: usize,
    },
    /// Any other line, `text` includes its line ending
    Text { text: &'a str },
}

impl Token<'_> {
    /// Append the original bytes of the line to `out`.
    pub(crate) fn push_to(&self, out: &mut String) {
        match self {
            Token::Version { text } | Token::Text { text } => out.push_str(text),
            Token::Include { directive, line_ending, .. } => {
                out.push_str(directive);
                out.push_str(line_ending);
            }
        }
    }
}

/// Lexing failure: an include directive whose path is not a closed quoted string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MalformedLine {
    pub line: usize,
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Directive name right after `#`, allowing blanks in between (`#  include`).
fn directive_body<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    let rest = body.trim_start().strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix(name)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '"' || c == '<' => Some(rest),
        Some(_) => None,
    }
}

/// Classify every line of `source`.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, MalformedLine> {
    let mut tokens = Vec::new();

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let line = index + 1;
        let (body, line_ending) = split_line_ending(raw);

        if directive_body(body, "version").is_some() {
            tokens.push(Token::Version { text: raw });
            continue;
        }

        if let Some(rest) = directive_body(body, "include") {
            let rest = rest.trim_start();
            // Angle-bracket includes are left for the driver to reject
            if rest.starts_with('<') {
                tokens.push(Token::Text { text: raw });
                continue;
            }
            let quoted = rest.strip_prefix('"').ok_or(MalformedLine { line })?;
            let end = quoted.find('"').ok_or(MalformedLine { line })?;
            let path = &quoted[..end];
            if path.is_empty() {
                return Err(MalformedLine { line });
            }
            tokens.push(Token::Include { path, directive: body, line_ending, line });
            continue;
        }

        tokens.push(Token::Text { text: raw });
    }

    Ok(tokens)
}
