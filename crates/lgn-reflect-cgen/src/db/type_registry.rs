use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Field types a reflected struct member may have.
///
/// The set is closed: it mirrors the runtime `VarType` enumeration, minus
/// `VarType_func` which is reserved for method thunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NativeType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Vec2,
    Vec3,
    Vec4,
    IVec2,
    IVec3,
    IVec4,
}

impl NativeType {
    /// Looks a type name up in the registry.
    pub fn from_type_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn type_name(self) -> &'static str {
        self.into()
    }

    /// Name of the matching runtime `VarType` enumerator.
    pub fn var_type(self) -> String {
        format!("VarType_{}", self.type_name())
    }

    /// Size in bytes of the type on the engine targets.
    pub fn byte_size(self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 | Self::Vec2 | Self::IVec2 => 8,
            Self::Vec3 | Self::IVec3 => 12,
            Self::Vec4 | Self::IVec4 => 16,
        }
    }
}
