use miette::Diagnostic;
use thiserror::Error;

/// Result type for template compilation, rendering and emission.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to compile template '{template}'")]
    #[diagnostic(code(crudgen::template))]
    Template {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render template '{template}'")]
    #[diagnostic(
        code(crudgen::render),
        help("the template references a value the entity request does not provide")
    )]
    Render {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(crudgen_core::Error),
}

impl From<Box<crudgen_core::Error>> for Error {
    fn from(err: Box<crudgen_core::Error>) -> Self {
        Self::Io(*err)
    }
}
