use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::{
    config::GeneratorConfig,
    diagnostics::{Diagnostic, DiagnosticKind},
    errors::{Error, Result},
    generators::{CodeEmitter, GeneratedArtifacts, Product},
    parser::parse_file,
};

pub struct ReflectContext {
    pub(super) init_function: String,
    pub(super) output: PathBuf,
    pub(super) inputs: Vec<PathBuf>,
    pub(super) config: GeneratorConfig,
}

impl Default for ReflectContext {
    fn default() -> Self {
        Self {
            init_function: "Init".to_owned(),
            output: PathBuf::from("reflect"),
            inputs: Vec::new(),
            config: GeneratorConfig::default(),
        }
    }
}

impl ReflectContext {
    pub fn init_function(&self) -> &str {
        &self.init_function
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `<output>.<declarations_extension>`
    pub fn declarations_path(&self) -> PathBuf {
        with_appended_extension(&self.output, &self.config.declarations_extension)
    }

    /// `<output>.<definitions_extension>`
    pub fn definitions_path(&self) -> PathBuf {
        with_appended_extension(&self.output, &self.config.definitions_extension)
    }

    pub fn output_paths(&self) -> [PathBuf; 2] {
        [self.declarations_path(), self.definitions_path()]
    }
}

pub struct ReflectBuildResult {
    /// Every input file looked at, in processing order.
    pub input_dependencies: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub outputs: Vec<PathBuf>,
}

/// Artifacts generated in memory, not yet written.
pub struct Generation {
    pub artifacts: GeneratedArtifacts,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Default)]
pub struct ReflectContextBuilder {
    context: ReflectContext,
}

impl ReflectContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_init_function(&mut self, init_function: impl AsRef<str>) {
        self.context.init_function = init_function.as_ref().to_owned();
    }

    /// Set the output base path, extensions are appended to it.
    ///
    /// # Errors
    /// The path has no file name.
    pub fn set_output(&mut self, output: &impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        if output.file_name().is_none() {
            return Err(Error::InvalidOutputPath(output.to_path_buf()));
        }
        self.context.output = output.to_path_buf();

        Ok(())
    }

    pub fn set_inputs(&mut self, inputs: Vec<PathBuf>) {
        self.context.inputs = inputs;
    }

    pub fn add_input(&mut self, input: impl Into<PathBuf>) {
        self.context.inputs.push(input.into());
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.context.config = config;
    }

    pub fn build(self) -> ReflectContext {
        self.context
    }
}

/// Run code generation and write both artifacts.
///
/// # Errors
/// An artifact cannot be written.
pub fn run(context: &ReflectContext) -> Result<ReflectBuildResult> {
    let Generation {
        artifacts,
        diagnostics,
    } = generate(context);

    let products = [
        Product::new(context.declarations_path(), artifacts.declarations),
        Product::new(context.definitions_path(), artifacts.definitions),
    ];
    for product in &products {
        product.write_to_disk()?;
    }

    Ok(ReflectBuildResult {
        input_dependencies: context.inputs.clone(),
        diagnostics,
        outputs: products
            .iter()
            .map(|product| product.path().to_path_buf())
            .collect(),
    })
}

/// Scans every input in order and builds both artifacts in memory.
///
/// Problems in the inputs are reported as diagnostics, never as errors.
pub fn generate(context: &ReflectContext) -> Generation {
    let declarations_path = context.declarations_path();
    let mut emitter = CodeEmitter::new(
        &context.config,
        &context.init_function,
        &file_name(&declarations_path),
    );
    let mut diagnostics = Vec::new();

    for input in &context.inputs {
        let content = match std::fs::read(input) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                let diagnostic = Diagnostic {
                    file: input.clone(),
                    line: 0,
                    kind: DiagnosticKind::UnreadableInput(err.to_string()),
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
                continue;
            }
        };

        let parsed = parse_file(input, &content, &context.config, &mut diagnostics);
        if !parsed.has_markers() {
            continue;
        }

        info!("found reflect in {}", input.display());
        emitter.include_source(&file_name(input));
        for declaration in &parsed.declarations {
            emitter.emit(declaration);
        }
    }

    Generation {
        artifacts: emitter.finish(),
        diagnostics,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn with_appended_extension(path: &Path, extension: &str) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push(".");
    file_name.push(extension);
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_append_extensions() {
        let mut builder = ReflectContextBuilder::new();
        builder.set_output(&"gen/reflect.gen").unwrap();
        let context = builder.build();
        assert_eq!(
            context.output_paths(),
            [
                PathBuf::from("gen/reflect.gen.h"),
                PathBuf::from("gen/reflect.gen.cpp")
            ]
        );
    }

    #[test]
    fn output_without_file_name() {
        let mut builder = ReflectContextBuilder::new();
        assert!(matches!(
            builder.set_output(&".."),
            Err(Error::InvalidOutputPath(_))
        ));
    }

    #[test]
    fn unreadable_input_is_a_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("Point.h");
        std::fs::write(&present, "//<REFLECT>\nstruct Point { f32 x; };\n").unwrap();

        let mut builder = ReflectContextBuilder::new();
        builder.set_init_function("Init");
        builder.add_input(dir.path().join("Missing.h"));
        builder.add_input(&present);
        let generation = generate(&builder.build());

        assert_eq!(generation.diagnostics.len(), 1);
        assert_eq!(generation.diagnostics[0].line, 0);
        assert!(matches!(
            generation.diagnostics[0].kind,
            DiagnosticKind::UnreadableInput(_)
        ));
        assert!(generation
            .artifacts
            .definitions
            .contains("#include \"Point.h\"\n"));
        assert!(generation
            .artifacts
            .definitions
            .contains("{ \"x\", VarType_f32, sizeof(f32), offsetof(Point, x) }"));
    }

    #[test]
    fn files_without_markers_are_not_included() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("Plain.h");
        std::fs::write(&plain, "#pragma once\nstruct Plain { f32 x; };\n").unwrap();

        let mut builder = ReflectContextBuilder::new();
        builder.add_input(&plain);
        let generation = generate(&builder.build());
        assert!(!generation.artifacts.definitions.contains("Plain"));
        assert!(generation.diagnostics.is_empty());
    }
}
