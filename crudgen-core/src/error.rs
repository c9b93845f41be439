use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for file emission (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to create directory '{path}'")]
    #[diagnostic(
        code(crudgen::create_dir),
        help("check that the output directory is writable")
    )]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(crudgen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::CreateDir {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }
}
