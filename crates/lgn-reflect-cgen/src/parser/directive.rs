use log::debug;

use super::identifier_prefix;

pub(crate) const PREFIX_ATTR: &str = "PREFIX";

/// Options written on the marker line after the marker itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveAttributes {
    /// Enumerator prefix to strip, without the trailing underscore.
    pub prefix: Option<String>,
}

impl DirectiveAttributes {
    fn parse(text: &str) -> Self {
        let mut attributes = Self::default();
        let mut tokens = text.split_whitespace();
        while let Some(token) = tokens.next() {
            match token {
                PREFIX_ATTR => {
                    attributes.prefix = tokens
                        .next()
                        .map(|prefix| prefix.trim_end_matches('_').to_owned());
                }
                _ => debug!("ignoring unknown reflection attribute `{}`", token),
            }
        }
        attributes
    }
}

/// What a marker is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Enum,
    Struct,
    Unrecognized,
}

impl DirectiveKind {
    /// Classifies the declaration line following a marker.
    pub(crate) fn classify(declaration: Option<&str>) -> Self {
        match declaration.map(identifier_prefix) {
            Some("enum") => Self::Enum,
            Some("struct" | "class") => Self::Struct,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectDirective {
    /// 0-based index of the marker line.
    pub line: usize,
    pub kind: DirectiveKind,
    pub attributes: DirectiveAttributes,
}

/// Finds the first marker at or after `from`.
pub(crate) fn find_next_directive(
    lines: &[&str],
    from: usize,
    marker: &str,
) -> Option<ReflectDirective> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find_map(|(index, line)| {
            line.trim()
                .strip_prefix(marker)
                .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
                .map(|rest| ReflectDirective {
                    line: index,
                    kind: DirectiveKind::classify(lines.get(index + 1).copied()),
                    attributes: DirectiveAttributes::parse(rest),
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "//<REFLECT>";

    #[test]
    fn classification() {
        assert_eq!(DirectiveKind::classify(Some("enum Color")), DirectiveKind::Enum);
        assert_eq!(
            DirectiveKind::classify(Some("  enum class Color {")),
            DirectiveKind::Enum
        );
        assert_eq!(DirectiveKind::classify(Some("struct Point")), DirectiveKind::Struct);
        assert_eq!(
            DirectiveKind::classify(Some("class Camera : public Node")),
            DirectiveKind::Struct
        );
        assert_eq!(
            DirectiveKind::classify(Some("structure_t value;")),
            DirectiveKind::Unrecognized
        );
        assert_eq!(
            DirectiveKind::classify(Some("int counter;")),
            DirectiveKind::Unrecognized
        );
        assert_eq!(DirectiveKind::classify(None), DirectiveKind::Unrecognized);
    }

    #[test]
    fn finds_markers_in_order() {
        let lines = [
            "#pragma once",
            "   //<REFLECT>   ",
            "enum Color {",
            "};",
            "//<REFLECT>",
            "struct Point {",
            "};",
        ];
        let first = find_next_directive(&lines, 0, MARKER).unwrap();
        assert_eq!(first.line, 1);
        assert_eq!(first.kind, DirectiveKind::Enum);

        let second = find_next_directive(&lines, 2, MARKER).unwrap();
        assert_eq!(second.line, 4);
        assert_eq!(second.kind, DirectiveKind::Struct);

        assert!(find_next_directive(&lines, 5, MARKER).is_none());
    }

    #[test]
    fn marker_on_last_line_is_unrecognized() {
        let lines = ["int x;", "//<REFLECT>"];
        let directive = find_next_directive(&lines, 0, MARKER).unwrap();
        assert_eq!(directive.kind, DirectiveKind::Unrecognized);
    }

    #[test]
    fn commented_out_marker_is_not_a_marker() {
        let lines = ["// //<REFLECT>", "enum Color {};"];
        assert!(find_next_directive(&lines, 0, MARKER).is_none());

        let lines = ["//<REFLECTED>", "enum Color {};"];
        assert!(find_next_directive(&lines, 0, MARKER).is_none());
    }

    #[test]
    fn prefix_attribute() {
        let lines = ["//<REFLECT> PREFIX TexturePixelFormat_", "enum TexturePixelFormat"];
        let directive = find_next_directive(&lines, 0, MARKER).unwrap();
        assert_eq!(
            directive.attributes.prefix.as_deref(),
            Some("TexturePixelFormat")
        );

        let lines = ["//<REFLECT> HIDDEN", "enum Color"];
        let directive = find_next_directive(&lines, 0, MARKER).unwrap();
        assert_eq!(directive.attributes, DirectiveAttributes::default());
    }
}
