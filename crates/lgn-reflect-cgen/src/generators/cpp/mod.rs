//! C++ text for the reflection runtime (`Reflection.h`).

pub(crate) mod enum_generator;
pub(crate) mod struct_generator;

/// Name of the `ReflectEnumInfo` global backing an enum.
pub(crate) fn enum_table(enum_name: &str) -> String {
    format!("enumReflect_{}", enum_name)
}

/// Name of the `ReflectStructInfo` global describing a struct.
pub(crate) fn struct_table(struct_name: &str) -> String {
    format!("reflectStructInfo_{}", struct_name)
}

/// Call handing a reflection table to the runtime registry.
pub(crate) fn register_call(register_fn: &str, table: &str) -> String {
    format!("{}(&{});", register_fn, table)
}
