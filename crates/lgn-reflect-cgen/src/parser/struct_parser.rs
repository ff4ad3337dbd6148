use log::trace;

use super::{
    block::{read_block, BlockError, BlockItem},
    directive::ReflectDirective,
    identifier_prefix, is_identifier, ParseResult,
};
use crate::{
    db::{MemberMetaInfo, NativeType, StructMetaInfo},
    diagnostics::{DiagnosticKind, DiagnosticSink},
};

/// Keyword introducing a reflected zero argument method.
const METHOD_KEYWORD: &str = "void";

const OPERATOR_KEYWORD: &str = "operator";

/// Two-token statements that are not member declarations.
const NON_MEMBER_KEYWORDS: [&str; 6] = ["using", "friend", "typedef", "return", "delete", "goto"];

/// Parses the struct or class declared on the line following `directive`.
pub(crate) fn parse_struct(
    lines: &[&str],
    directive: &ReflectDirective,
    warn_unsupported: bool,
    sink: &mut DiagnosticSink<'_>,
) -> ParseResult<StructMetaInfo> {
    let decl_index = directive.line + 1;
    let name = match lines.get(decl_index).and_then(|line| parse_name(line)) {
        Some(name) => name,
        None => {
            sink.report(decl_index, DiagnosticKind::MissingStructName);
            return ParseResult::skipped(decl_index + 1);
        }
    };

    let block = match read_block(lines, decl_index, ';') {
        Ok(block) => block,
        Err(BlockError::MissingBody) => {
            sink.report(decl_index, DiagnosticKind::MissingBody(name));
            return ParseResult::skipped(decl_index + 1);
        }
        Err(BlockError::Unclosed) => {
            sink.report(decl_index, DiagnosticKind::UnclosedBlock("struct"));
            return ParseResult::skipped(lines.len());
        }
    };

    let mut members = Vec::new();
    for item in &block.items {
        parse_member(item, warn_unsupported, sink, &mut members);
    }
    for member in &members {
        match member {
            MemberMetaInfo::Field { name: field, ty } => trace!(
                "{}::{}: {} ({} bytes)",
                name,
                field,
                ty,
                ty.byte_size()
            ),
            MemberMetaInfo::Method { name: method } => trace!("{}::{}()", name, method),
        }
    }

    ParseResult {
        next_line: block.end,
        meta_info: Some(StructMetaInfo { name, members }),
    }
}

fn parse_name(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    tokens.next()?;
    let name = identifier_prefix(tokens.next()?);
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

fn parse_member(
    item: &BlockItem,
    warn_unsupported: bool,
    sink: &mut DiagnosticSink<'_>,
    members: &mut Vec<MemberMetaInfo>,
) {
    let text = item.text.as_str();
    let type_name = match text.split_whitespace().next() {
        Some(type_name) => type_name,
        None => return,
    };
    let declarators = text[type_name.len()..].trim();

    if let Some(ty) = NativeType::from_type_name(type_name) {
        for declarator in declarators.split(',') {
            let name = declarator
                .split(|c: char| c == '=' || c == '{')
                .next()
                .unwrap_or_default()
                .trim();
            if name.contains('[') {
                sink.report(item.line, DiagnosticKind::ArrayMember(name.to_owned()));
            } else if is_identifier(name) {
                members.push(MemberMetaInfo::Field {
                    name: name.to_owned(),
                    ty,
                });
            } else if warn_unsupported && !name.is_empty() {
                sink.report(
                    item.line,
                    DiagnosticKind::UnsupportedMember {
                        name: name.to_owned(),
                        ty: type_name.to_owned(),
                    },
                );
            }
        }
    } else if type_name == METHOD_KEYWORD {
        if let Some((name, rest)) = declarators.split_once('(') {
            let name = name.trim();
            // `operator()` has no member-call spelling a thunk could use
            if !is_identifier(name) || name == OPERATOR_KEYWORD {
                return;
            }
            let params = rest.split(')').next().unwrap_or_default().trim();
            if params.is_empty() || params == "void" {
                members.push(MemberMetaInfo::Method {
                    name: name.to_owned(),
                });
            } else {
                sink.report(
                    item.line,
                    DiagnosticKind::MethodWithArguments(name.to_owned()),
                );
            }
        }
    } else if warn_unsupported
        && is_identifier(type_name)
        && !NON_MEMBER_KEYWORDS.contains(&type_name)
        && is_identifier(declarators)
    {
        sink.report(
            item.line,
            DiagnosticKind::UnsupportedMember {
                name: declarators.to_owned(),
                ty: type_name.to_owned(),
            },
        );
    }
}
