use log::trace;

use super::{
    block::{read_block, BlockError},
    directive::{DirectiveAttributes, ReflectDirective},
    identifier_prefix, ParseResult,
};
use crate::{
    db::{EnumMetaInfo, EnumValue, EnumeratorMetaInfo},
    diagnostics::{DiagnosticKind, DiagnosticSink},
};

struct EnumHeader {
    name: String,
    scoped: bool,
    underlying: Option<String>,
}

/// Parses the enum declared on the line following `directive`.
pub(crate) fn parse_enum(
    lines: &[&str],
    directive: &ReflectDirective,
    sink: &mut DiagnosticSink<'_>,
) -> ParseResult<EnumMetaInfo> {
    let decl_index = directive.line + 1;
    let header = match lines.get(decl_index).and_then(|line| parse_header(line)) {
        Some(header) => header,
        None => {
            sink.report(decl_index, DiagnosticKind::MissingEnumName);
            return ParseResult::skipped(decl_index + 1);
        }
    };

    let block = match read_block(lines, decl_index, ',') {
        Ok(block) => block,
        Err(BlockError::MissingBody) => {
            sink.report(decl_index, DiagnosticKind::MissingBody(header.name));
            return ParseResult::skipped(decl_index + 1);
        }
        Err(BlockError::Unclosed) => {
            sink.report(decl_index, DiagnosticKind::UnclosedBlock("enum"));
            return ParseResult::skipped(lines.len());
        }
    };

    let mut base: Option<String> = None;
    let mut counter = 0_i64;
    let mut enumerators = Vec::with_capacity(block.items.len());
    for item in &block.items {
        let (raw_name, explicit) = match item.text.split_once('=') {
            Some((name, value)) => (name, Some(value.trim())),
            None => (item.text.as_str(), None),
        };
        let raw_name = match raw_name.split_whitespace().next() {
            Some(raw_name) => raw_name,
            None => continue,
        };

        if let Some(explicit) = explicit.filter(|value| !value.is_empty()) {
            base = Some(explicit.to_owned());
            counter = 0;
        }

        let enumerator = EnumeratorMetaInfo {
            name: display_name(raw_name, &directive.attributes),
            value: EnumValue::resolve(base.as_deref(), counter),
        };
        trace!(
            "{}::{} = {}",
            header.name,
            enumerator.name,
            enumerator.value
        );
        enumerators.push(enumerator);

        // the counter moves on after every enumerator, explicit or not
        counter += 1;
    }

    ParseResult {
        next_line: block.end,
        meta_info: Some(EnumMetaInfo {
            name: header.name,
            scoped: header.scoped,
            underlying: header.underlying,
            enumerators,
        }),
    }
}

fn parse_header(line: &str) -> Option<EnumHeader> {
    let header = line.split('{').next().unwrap_or_default();
    let rest = header.trim_start().strip_prefix("enum")?.trim_start();

    let keyword = identifier_prefix(rest);
    let scoped = keyword == "class" || keyword == "struct";
    let rest = if scoped {
        rest[keyword.len()..].trim_start()
    } else {
        rest
    };

    let name = identifier_prefix(rest);
    if name.is_empty() {
        return None;
    }
    let underlying = rest[name.len()..]
        .trim()
        .strip_prefix(':')
        .map(|ty| ty.trim().trim_end_matches(';').trim())
        .filter(|ty| !ty.is_empty())
        .map(ToOwned::to_owned);

    Some(EnumHeader {
        name: name.to_owned(),
        scoped,
        underlying,
    })
}

/// Strips the enumerator prefix: everything up to the first underscore, or
/// exactly `<prefix>_` when the directive names the prefix.
fn display_name(raw_name: &str, attributes: &DirectiveAttributes) -> String {
    let raw_name = raw_name.trim_end_matches(',');
    let stripped = match &attributes.prefix {
        Some(prefix) => raw_name
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(raw_name),
        None => raw_name
            .split_once('_')
            .map_or(raw_name, |(_prefix, rest)| rest),
    };
    if stripped.is_empty() {
        raw_name.to_owned()
    } else {
        stripped.to_owned()
    }
}
