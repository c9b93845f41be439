//! The fixed set of scaffold templates.
//!
//! Template bodies live in `templates/` as plain data and are compiled once
//! into the [`TemplateSet`] that owns them.

use std::path::{Path, PathBuf};

use crudgen_core::to_lower;
use minijinja::{Environment, Template, UndefinedBehavior};

use crate::{
    error::{Error, Result},
    request::EntityRequest,
};

/// One of the files that make up a scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Service entry point
    Main,
    /// Environment file with the placeholder connection string
    Env,
    /// Database connection setup
    Setup,
    /// The five CRUD handlers
    Handler,
    /// Route group registration
    Route,
    /// Stored record type
    Model,
    /// Response envelope
    Response,
}

impl TemplateKind {
    /// Every template, in emission order.
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::Main,
        TemplateKind::Env,
        TemplateKind::Setup,
        TemplateKind::Handler,
        TemplateKind::Route,
        TemplateKind::Model,
        TemplateKind::Response,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Main => "main",
            TemplateKind::Env => "env",
            TemplateKind::Setup => "setup",
            TemplateKind::Handler => "handler",
            TemplateKind::Route => "route",
            TemplateKind::Model => "model",
            TemplateKind::Response => "response",
        }
    }

    fn source(self) -> &'static str {
        match self {
            TemplateKind::Main => include_str!("../templates/main.go.j2"),
            TemplateKind::Env => include_str!("../templates/env.j2"),
            TemplateKind::Setup => include_str!("../templates/setup.go.j2"),
            TemplateKind::Handler => include_str!("../templates/handler.go.j2"),
            TemplateKind::Route => include_str!("../templates/route.go.j2"),
            TemplateKind::Model => include_str!("../templates/model.go.j2"),
            TemplateKind::Response => include_str!("../templates/response.go.j2"),
        }
    }

    /// Whether the template is rendered against the entity request.
    ///
    /// `Env` and `Setup` are identical for every entity.
    pub fn uses_entity(self) -> bool {
        !matches!(self, TemplateKind::Env | TemplateKind::Setup)
    }

    /// Output path relative to the output base directory.
    pub fn relative_path(self, request: &EntityRequest) -> PathBuf {
        let app = Path::new("app");
        let entity_file = || format!("{}.go", request.entity_lower());

        match self {
            TemplateKind::Main => app.join("main.go"),
            TemplateKind::Env => PathBuf::from(".env"),
            TemplateKind::Setup => app.join("configs").join("setup.go"),
            TemplateKind::Handler => app.join("handler").join(entity_file()),
            TemplateKind::Route => app.join("routes").join(entity_file()),
            TemplateKind::Model => app.join("models").join(entity_file()),
            TemplateKind::Response => app.join("responses").join(entity_file()),
        }
    }
}

/// Compiled templates, shared by every render.
///
/// Only the `lower` filter is available to template expressions; plain
/// substitution covers the identity case. Referencing a value the context
/// does not provide is a render error rather than an empty string.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    pub fn new() -> Result<Self> {
        let mut env = Environment::empty();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("lower", lower);

        for kind in TemplateKind::ALL {
            env.add_template(kind.name(), kind.source())
                .map_err(|source| Error::Template {
                    template: kind.name(),
                    source,
                })?;
        }

        Ok(Self { env })
    }

    pub(crate) fn get(&self, kind: TemplateKind) -> Result<Template<'_, '_>> {
        self.env
            .get_template(kind.name())
            .map_err(|source| Error::Template {
                template: kind.name(),
                source,
            })
    }
}

#[cfg(test)]
impl TemplateSet {
    /// Swap in a different body for `kind`.
    pub(crate) fn replace(&mut self, kind: TemplateKind, source: &'static str) {
        self.env
            .add_template(kind.name(), source)
            .expect("replacement template compiles");
    }
}

fn lower(value: String) -> String {
    to_lower(&value)
}
