//! Generator configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `LGN_REFLECT_*` environment variables.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// The prefix of the environment variables overriding configuration values.
pub static ENV_PREFIX: &str = "LGN_REFLECT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Comment line flagging the next declaration for reflection.
    pub marker: String,
    /// Extensions of the files picked up in source directories.
    pub header_extensions: Vec<String>,
    pub declarations_extension: String,
    pub definitions_extension: String,
    /// Includes written at the top of the definitions, before the
    /// declarations artifact itself.
    pub prelude_includes: Vec<String>,
    /// Runtime function receiving each `ReflectEnumInfo` from the initializer.
    pub enum_register_fn: Option<String>,
    /// Runtime function receiving each `ReflectStructInfo` from the initializer.
    pub struct_register_fn: Option<String>,
    /// Report struct members whose type is not reflectable instead of
    /// skipping them silently.
    pub warn_unsupported_members: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: "//<REFLECT>".to_owned(),
            header_extensions: vec!["h".to_owned()],
            declarations_extension: "h".to_owned(),
            definitions_extension: "cpp".to_owned(),
            prelude_includes: vec!["Neo.h".to_owned()],
            enum_register_fn: None,
            struct_register_fn: None,
            warn_unsupported_members: false,
        }
    }
}

impl GeneratorConfig {
    /// Load the configuration, merging the optional TOML file and the
    /// environment over the defaults.
    ///
    /// # Errors
    ///
    /// If the file cannot be parsed or a value has the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(config_file) = config_file {
            figment = figment.merge(Toml::file(config_file));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)).extract()?)
    }

    /// Load the configuration from a TOML string over the defaults, ignoring
    /// the environment.
    ///
    /// # Errors
    ///
    /// If the string cannot be parsed or a value has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(content))
            .extract()?)
    }

    pub(crate) fn has_header_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .map_or(false, |ext| {
                self.header_extensions
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(ext))
            })
    }
}
