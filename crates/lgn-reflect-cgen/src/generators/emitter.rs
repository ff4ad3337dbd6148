use super::{
    cpp::{enum_generator, enum_table, register_call, struct_generator, struct_table},
    file_writer::FileWriter,
};
use crate::{
    config::GeneratorConfig,
    db::{EnumMetaInfo, StructMetaInfo},
    parser::Declaration,
};

const GENERATED_BANNER: &str = "// This file is generated by lgn-reflect-cgen. Do not edit manually.";

/// Text of the two artifacts of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub declarations: String,
    pub definitions: String,
}

/// Accumulates the declarations, the definitions and the initializer
/// statements of a whole run.
///
/// Prologues are written on creation; the initializer routine is written by
/// [`CodeEmitter::finish`], after every input file has been emitted.
pub struct CodeEmitter<'a> {
    config: &'a GeneratorConfig,
    init_function: String,
    declarations: FileWriter,
    definitions: FileWriter,
    initializer: Vec<String>,
}

impl<'a> CodeEmitter<'a> {
    /// `declarations_file_name` is the name under which the definitions
    /// include the declarations artifact.
    pub fn new(
        config: &'a GeneratorConfig,
        init_function: impl Into<String>,
        declarations_file_name: &str,
    ) -> Self {
        let init_function = init_function.into();

        let mut declarations = FileWriter::new();
        declarations.add_lines(&[
            GENERATED_BANNER.to_owned(),
            "#pragma once".to_owned(),
            format!("void {}();", init_function),
        ]);
        declarations.new_line();

        let mut definitions = FileWriter::new();
        definitions.add_line(GENERATED_BANNER);
        for include in &config.prelude_includes {
            definitions.add_line(include_line(include));
        }
        definitions.add_line(include_line(declarations_file_name));
        definitions.new_line();

        Self {
            config,
            init_function,
            declarations,
            definitions,
            initializer: Vec::new(),
        }
    }

    /// Includes an input file in the definitions. Called once per file, on
    /// its first marker.
    pub fn include_source(&mut self, file_name: &str) {
        self.definitions.add_line(include_line(file_name));
    }

    pub fn emit(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Enum(meta_info) => self.emit_enum(meta_info),
            Declaration::Struct(meta_info) => self.emit_struct(meta_info),
        }
    }

    pub fn emit_enum(&mut self, meta_info: &EnumMetaInfo) {
        enum_generator::generate_declarations(meta_info, &mut self.declarations);
        enum_generator::generate_definitions(meta_info, &mut self.definitions);
        self.initializer
            .extend(enum_generator::generate_initializer(meta_info));
        if let Some(register_fn) = &self.config.enum_register_fn {
            self.initializer
                .push(register_call(register_fn, &enum_table(&meta_info.name)));
        }
    }

    pub fn emit_struct(&mut self, meta_info: &StructMetaInfo) {
        struct_generator::generate_declarations(meta_info, &mut self.declarations);
        struct_generator::generate_definitions(meta_info, &mut self.definitions);
        if let Some(register_fn) = &self.config.struct_register_fn {
            self.initializer
                .push(register_call(register_fn, &struct_table(&meta_info.name)));
        }
    }

    /// Statements accumulated so far for the initializer routine.
    pub fn initializer_statements(&self) -> &[String] {
        &self.initializer
    }

    /// Writes the initializer routine and returns both artifacts.
    pub fn finish(mut self) -> GeneratedArtifacts {
        {
            let mut writer = self
                .definitions
                .add_block(&[format!("void {}()", self.init_function), "{".to_owned()], &["}"]);
            writer.add_lines(&self.initializer);
        }

        GeneratedArtifacts {
            declarations: self.declarations.build(),
            definitions: self.definitions.build(),
        }
    }
}

fn include_line(file_name: &str) -> String {
    format!("#include \"{}\"", file_name)
}
