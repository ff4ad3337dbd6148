//! Descriptors extracted from annotated declarations.

mod type_registry;

use std::fmt;

pub use type_registry::NativeType;

/// Value of an enumerator, as it is written in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    /// Fully resolved integer.
    Literal(i64),
    /// Offset from a base the generator cannot evaluate (an external
    /// constant, an expression). The base is carried through untouched.
    Symbolic { base: String, offset: i64 },
}

impl EnumValue {
    /// Resolves the value of an enumerator `offset` positions after the last
    /// explicit base, if any.
    pub fn resolve(base: Option<&str>, offset: i64) -> Self {
        match base {
            None => Self::Literal(offset),
            Some(base) => match parse_integer(base).and_then(|value| value.checked_add(offset)) {
                Some(value) => Self::Literal(value),
                None => Self::Symbolic {
                    base: base.to_owned(),
                    offset,
                },
            },
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Symbolic { base, offset } => {
                if base.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ':') {
                    write!(f, "{} + {}", base, offset)
                } else {
                    write!(f, "({}) + {}", base, offset)
                }
            }
        }
    }
}

/// Parses a C integer literal: decimal, `0x`, `0b` or leading-zero octal,
/// with an optional sign.
fn parse_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let value = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        i64::from_str_radix(bin, 2).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratorMetaInfo {
    /// Display name, after prefix stripping.
    pub name: String,
    pub value: EnumValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMetaInfo {
    pub name: String,
    /// Declared as `enum class` / `enum struct`.
    pub scoped: bool,
    pub underlying: Option<String>,
    pub enumerators: Vec<EnumeratorMetaInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberMetaInfo {
    Field { name: String, ty: NativeType },
    /// Zero argument method invoked through a thunk.
    Method { name: String },
}

impl MemberMetaInfo {
    pub fn name(&self) -> &str {
        match self {
            Self::Field { name, .. } | Self::Method { name } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMetaInfo {
    pub name: String,
    pub members: Vec<MemberMetaInfo>,
}
