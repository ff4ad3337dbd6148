use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list directory: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error("source directory `{0}` does not exist")]
    MissingSourceDir(PathBuf),
    #[error("output path `{0}` has no file name")]
    InvalidOutputPath(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
