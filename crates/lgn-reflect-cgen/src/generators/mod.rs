//! Code emission for the declarations and definitions artifacts.

mod cpp;
mod emitter;
mod file_writer;
mod product;

pub use emitter::{CodeEmitter, GeneratedArtifacts};
pub use product::Product;
