//! Reflection directive scanning and declaration parsing.
//!
//! The grammar is line oriented: a marker comment flags the declaration on the
//! next line, and only the body of that declaration is looked at. Everything
//! else in a header is skipped.

mod block;
mod directive;
mod enum_parser;
mod struct_parser;

use std::path::Path;

use log::debug;

pub use directive::{DirectiveAttributes, DirectiveKind, ReflectDirective};

use crate::{
    config::GeneratorConfig,
    db::{EnumMetaInfo, StructMetaInfo},
    diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink},
};

/// A declaration successfully extracted from a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Enum(EnumMetaInfo),
    Struct(StructMetaInfo),
}

/// Everything found in one input file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    /// Number of markers, including the ones that produced nothing.
    pub marker_count: usize,
    pub declarations: Vec<Declaration>,
}

impl ParsedFile {
    pub fn has_markers(&self) -> bool {
        self.marker_count > 0
    }
}

pub(crate) struct ParseResult<T> {
    /// Line where scanning resumes.
    pub next_line: usize,
    pub meta_info: Option<T>,
}

impl<T> ParseResult<T> {
    pub(crate) fn skipped(next_line: usize) -> Self {
        Self {
            next_line,
            meta_info: None,
        }
    }
}

/// Scans `content` top to bottom and parses every marked declaration.
pub fn parse_file(
    path: &Path,
    content: &str,
    config: &GeneratorConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> ParsedFile {
    let lines = content.lines().collect::<Vec<_>>();
    let mut sink = DiagnosticSink::new(path, diagnostics);
    let mut parsed = ParsedFile::default();

    let mut line = 0;
    while let Some(directive) = directive::find_next_directive(&lines, line, &config.marker) {
        parsed.marker_count += 1;
        let (next_line, declaration) = dispatch(&lines, &directive, config, &mut sink);
        debug_assert!(next_line > directive.line);
        if let Some(declaration) = declaration {
            parsed.declarations.push(declaration);
        }
        line = next_line;
    }

    parsed
}

/// Routes a directive to the parser matching its declaration.
///
/// Returns the line where scanning resumes and the parsed declaration, if
/// any.
fn dispatch(
    lines: &[&str],
    directive: &ReflectDirective,
    config: &GeneratorConfig,
    sink: &mut DiagnosticSink<'_>,
) -> (usize, Option<Declaration>) {
    match directive.kind {
        DirectiveKind::Enum => {
            let result = enum_parser::parse_enum(lines, directive, sink);
            (result.next_line, result.meta_info.map(Declaration::Enum))
        }
        DirectiveKind::Struct => {
            let result = struct_parser::parse_struct(
                lines,
                directive,
                config.warn_unsupported_members,
                sink,
            );
            (result.next_line, result.meta_info.map(Declaration::Struct))
        }
        DirectiveKind::Unrecognized => {
            debug!("marker at line {} is not followed by a declaration", directive.line + 1);
            sink.report(directive.line, DiagnosticKind::MalformedDirective);
            (directive.line + 1, None)
        }
    }
}

/// Leading identifier characters of `text`, after leading whitespace.
pub(crate) fn identifier_prefix(text: &str) -> &str {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    &text[..end]
}

pub(crate) fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with(|c: char| c.is_ascii_digit())
        && text.chars().all(|c| c.is_alphanumeric() || c == '_')
}
