use crate::{
    db::{MemberMetaInfo, StructMetaInfo},
    generators::file_writer::FileWriter,
};

use super::struct_table;

pub(crate) fn generate_declarations(meta_info: &StructMetaInfo, writer: &mut FileWriter) {
    writer.add_line(format!("//#### STRUCT {} ####", meta_info.name));
    writer.add_line(format!(
        "extern ReflectStructInfo {};",
        struct_table(&meta_info.name)
    ));
    writer.new_line();
}

pub(crate) fn generate_definitions(meta_info: &StructMetaInfo, writer: &mut FileWriter) {
    let name = &meta_info.name;
    {
        let mut writer = writer.add_block(
            &[
                format!("ReflectStructInfo {}", struct_table(name)),
                "{".to_owned(),
            ],
            &["};"],
        );
        writer.add_line(format!("\"{0}\", sizeof({0}),", name));
        {
            let mut writer = writer.add_block(&["{"], &["}"]);
            let entries = meta_info
                .members
                .iter()
                .map(|member| member_entry(name, member))
                .collect::<Vec<_>>();
            writer.add_separated_lines(&entries);
        }
    }
    writer.new_line();
}

fn member_entry(struct_name: &str, member: &MemberMetaInfo) -> String {
    match member {
        MemberMetaInfo::Field { name, ty } => format!(
            "{{ \"{name}\", {var_type}, sizeof({ty}), offsetof({struct_name}, {name}) }}",
            name = name,
            var_type = ty.var_type(),
            ty = ty.type_name(),
            struct_name = struct_name,
        ),
        MemberMetaInfo::Method { name } => format!(
            "{{ \"{name}\", VarType_func, 0, 0, [](void* obj) {{ (({struct_name}*)obj)->{name}(); }} }}",
            name = name,
            struct_name = struct_name,
        ),
    }
}
