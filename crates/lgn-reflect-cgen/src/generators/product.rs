use std::path::{Path, PathBuf};

use log::info;

use crate::errors::{Error, Result};

/// A generated artifact and its destination.
#[derive(Debug)]
pub struct Product {
    path: PathBuf,
    content: String,
}

impl Product {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the product, creating the output folder if needed.
    ///
    /// # Errors
    ///
    /// If the folder or the file cannot be written.
    pub fn write_to_disk(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }
        std::fs::write(&self.path, &self.content).map_err(|err| Error::io(&self.path, err))?;
        info!("wrote {}", self.path.display());
        Ok(())
    }
}
