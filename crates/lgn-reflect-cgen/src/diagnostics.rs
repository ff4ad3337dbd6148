//! Non fatal problems found while scanning annotated headers.
//!
//! None of these stop a run: the offending directive (or member) is skipped
//! and generation carries on with the rest of the input set.

use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("reflection marker is not followed by an enum, struct or class")]
    MalformedDirective,
    #[error("{0} block reaches the end of the file without a closing brace")]
    UnclosedBlock(&'static str),
    #[error("struct or class declaration has no name")]
    MissingStructName,
    #[error("enum declaration has no name")]
    MissingEnumName,
    #[error("`{0}` is declared without a body")]
    MissingBody(String),
    #[error("method `{0}` takes arguments and cannot be reflected")]
    MethodWithArguments(String),
    #[error("array member `{0}` cannot be reflected")]
    ArrayMember(String),
    #[error("member `{name}` has unsupported type `{ty}`")]
    UnsupportedMember { name: String, ty: String },
    #[error("input could not be read: {0}")]
    UnreadableInput(String),
}

/// A diagnostic attached to a position in an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    /// 1-based line number, 0 when the whole file is concerned.
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}: {}", self.file.display(), self.kind)
        } else {
            write!(f, "{}:{}: {}", self.file.display(), self.line, self.kind)
        }
    }
}

/// Collects diagnostics for one input file.
///
/// Parsers report with 0-based line indices, the sink converts them.
pub(crate) struct DiagnosticSink<'a> {
    file: &'a Path,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> DiagnosticSink<'a> {
    pub(crate) fn new(file: &'a Path, diagnostics: &'a mut Vec<Diagnostic>) -> Self {
        Self { file, diagnostics }
    }

    pub(crate) fn report(&mut self, line_index: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            file: self.file.to_path_buf(),
            line: line_index + 1,
            kind,
        };
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}
