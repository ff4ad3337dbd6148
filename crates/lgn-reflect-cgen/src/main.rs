//! Reflection code generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{AppSettings, Parser};
use lgn_reflect_cgen::{
    config::GeneratorConfig,
    discovery::{discover_inputs, needs_regeneration},
    run::{run, ReflectBuildResult, ReflectContextBuilder},
};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser, Debug)]
#[clap(name = "reflect-cgen")]
#[clap(about = "Reflection code generator for annotated C++ headers", version, author)]
#[clap(setting(AppSettings::ArgRequiredElseHelp))]
struct Cli {
    /// Verbose mode
    #[clap(long, short)]
    verbose: bool,
    /// Generate even if the outputs are up to date
    #[clap(long, short)]
    force: bool,
    /// Configuration file
    #[clap(long, short, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Name of the generated initializer function
    init_func: String,
    /// Output base path, extensions are appended to it
    #[clap(parse(from_os_str))]
    output: PathBuf,
    /// Directories scanned for headers
    #[clap(required = true, parse(from_os_str))]
    source_dirs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let res = main_internal();

    match &res {
        Ok(Some(result)) => {
            if !result.diagnostics.is_empty() {
                eprintln!("{} reflection diagnostics:", result.diagnostics.len());
                for diagnostic in &result.diagnostics {
                    eprintln!("{}", diagnostic);
                }
            }
        }
        Ok(None) => {
            println!("Reflection is up to date");
        }
        Err(err) => {
            for i in err.chain() {
                eprintln!("{}", i);
            }
        }
    }
    res.map(|_| ())
}

fn main_internal() -> Result<Option<ReflectBuildResult>> {
    // read command line arguments
    let args = Cli::parse();

    let log_level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(log_level).init()?;

    let config = GeneratorConfig::load(args.config.as_deref())?;
    let inputs = discover_inputs(&args.source_dirs, &config)?;

    // initialize context
    let mut ctx_builder = ReflectContextBuilder::new();
    ctx_builder.set_init_function(&args.init_func);
    ctx_builder.set_output(&args.output)?;
    ctx_builder.set_inputs(inputs);
    ctx_builder.set_config(config);
    let context = ctx_builder.build();

    println!("Scanning {} files for reflection data...", context.inputs().len());

    if !args.force && !needs_regeneration(context.inputs(), &context.output_paths())? {
        return Ok(None);
    }

    // run the generation
    Ok(Some(run(&context)?))
}
