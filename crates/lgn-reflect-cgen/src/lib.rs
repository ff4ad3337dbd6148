//! Reflection metadata generation for annotated C++ headers.
//!
//! Declarations preceded by a `//<REFLECT>` marker comment are extracted from
//! the headers of a set of source directories, and turned into a declarations
//! artifact and a definitions artifact consumed by the engine's reflection
//! runtime: enum name tables, struct descriptor tables and an initializer
//! routine filling them at startup.

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod discovery;
pub mod errors;
pub mod generators;
pub mod parser;
pub mod run;

pub use errors::{Error, Result};
