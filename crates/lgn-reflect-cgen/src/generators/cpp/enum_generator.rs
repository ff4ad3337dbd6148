use crate::{db::EnumMetaInfo, generators::file_writer::FileWriter};

use super::enum_table;

pub(crate) fn generate_declarations(meta_info: &EnumMetaInfo, writer: &mut FileWriter) {
    let name = &meta_info.name;
    writer.add_line(forward_declaration(meta_info));
    writer.add_line(format!(
        "bool {0}_StringToEnum(string name, {0} &value);",
        name
    ));
    writer.add_line(format!(
        "bool {0}_EnumToString({0} value, string &name);",
        name
    ));
    writer.new_line();
}

pub(crate) fn generate_definitions(meta_info: &EnumMetaInfo, writer: &mut FileWriter) {
    let name = &meta_info.name;
    let table = enum_table(name);

    writer.add_line(format!("ReflectEnumInfo {};", table));
    {
        let mut writer = writer.add_block(
            &[
                format!("bool {0}_StringToEnum(string name, {0} &value)", name),
                "{".to_owned(),
            ],
            &["}"],
        );
        writer.add_line(format!(
            "auto it = {}.map_stringToInt.find(name);",
            table
        ));
        {
            let mut writer = writer.add_block(
                &[
                    format!("if (it != {}.map_stringToInt.end())", table),
                    "{".to_owned(),
                ],
                &["}"],
            );
            writer.add_line(format!("value = ({})it->second;", name));
            writer.add_line("return true;");
        }
        writer.add_line("return false;");
    }
    {
        let mut writer = writer.add_block(
            &[
                format!("bool {0}_EnumToString({0} value, string &name)", name),
                "{".to_owned(),
            ],
            &["}"],
        );
        writer.add_line(format!(
            "auto it = {}.map_intToString.find((int)value);",
            table
        ));
        {
            let mut writer = writer.add_block(
                &[
                    format!("if (it != {}.map_intToString.end())", table),
                    "{".to_owned(),
                ],
                &["}"],
            );
            writer.add_line("name = it->second;");
            writer.add_line("return true;");
        }
        writer.add_line("return false;");
    }
    writer.new_line();
}

/// Statements filling the lookup tables, run by the initializer.
pub(crate) fn generate_initializer(meta_info: &EnumMetaInfo) -> Vec<String> {
    let table = enum_table(&meta_info.name);
    let mut statements = Vec::with_capacity(1 + 2 * meta_info.enumerators.len());

    statements.push(format!("{}.name=\"{}\";", table, meta_info.name));
    for enumerator in &meta_info.enumerators {
        statements.push(format!(
            "{}.map_intToString.insert({{ {},\"{}\" }});",
            table, enumerator.value, enumerator.name
        ));
        statements.push(format!(
            "{}.map_stringToInt.insert({{ \"{}\",{} }});",
            table, enumerator.name, enumerator.value
        ));
    }
    statements
}

fn forward_declaration(meta_info: &EnumMetaInfo) -> String {
    let keyword = if meta_info.scoped { "enum class" } else { "enum" };
    match &meta_info.underlying {
        Some(underlying) => format!("{} {} : {};", keyword, meta_info.name, underlying),
        None => format!("{} {};", keyword, meta_info.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{EnumValue, EnumeratorMetaInfo};

    fn state() -> EnumMetaInfo {
        EnumMetaInfo {
            name: "State".to_owned(),
            scoped: true,
            underlying: None,
            enumerators: vec![
                EnumeratorMetaInfo {
                    name: "IDLE".to_owned(),
                    value: EnumValue::Literal(5),
                },
                EnumeratorMetaInfo {
                    name: "Worker".to_owned(),
                    value: EnumValue::Symbolic {
                        base: "ThreadGUID_MAX".to_owned(),
                        offset: 1,
                    },
                },
            ],
        }
    }

    #[test]
    fn declarations() {
        let mut writer = FileWriter::new();
        generate_declarations(&state(), &mut writer);
        assert_eq!(
            writer.build(),
            "enum class State;\n\
             bool State_StringToEnum(string name, State &value);\n\
             bool State_EnumToString(State value, string &name);\n\
             \n"
        );
    }

    #[test]
    fn forward_declarations_follow_the_source() {
        let mut meta_info = state();
        meta_info.scoped = false;
        assert_eq!(forward_declaration(&meta_info), "enum State;");
        meta_info.underlying = Some("u8".to_owned());
        assert_eq!(forward_declaration(&meta_info), "enum State : u8;");
    }

    #[test]
    fn definitions_use_the_lookup_tables() {
        let mut writer = FileWriter::new();
        generate_definitions(&state(), &mut writer);
        let content = writer.build();
        assert!(content.starts_with("ReflectEnumInfo enumReflect_State;\n"));
        assert!(content.contains("  auto it = enumReflect_State.map_stringToInt.find(name);\n"));
        assert!(content.contains("    value = (State)it->second;\n    return true;\n"));
        assert!(content.contains("bool State_EnumToString(State value, string &name)\n{\n"));
        assert!(content.contains("enumReflect_State.map_intToString.find((int)value);"));
        assert!(content.ends_with("  return false;\n}\n\n"));
    }

    #[test]
    fn initializer_registers_both_directions() {
        assert_eq!(
            generate_initializer(&state()),
            vec![
                "enumReflect_State.name=\"State\";",
                "enumReflect_State.map_intToString.insert({ 5,\"IDLE\" });",
                "enumReflect_State.map_stringToInt.insert({ \"IDLE\",5 });",
                "enumReflect_State.map_intToString.insert({ ThreadGUID_MAX + 1,\"Worker\" });",
                "enumReflect_State.map_stringToInt.insert({ \"Worker\",ThreadGUID_MAX + 1 });",
            ]
        );
    }
}
