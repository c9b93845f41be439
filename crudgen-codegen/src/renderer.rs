//! Binds an [`EntityRequest`] to the template set.

use std::path::{Path, PathBuf};

use crudgen_core::GeneratedFile;
use minijinja::context;

use crate::{
    error::{Error, Result},
    request::EntityRequest,
    template::{TemplateKind, TemplateSet},
};

/// A rendered template and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    kind: TemplateKind,
    path: PathBuf,
    content: String,
}

impl RenderedFile {
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Path relative to the output base directory.
    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for RenderedFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Renders templates against a request.
pub struct Renderer<'a> {
    templates: &'a TemplateSet,
}

impl<'a> Renderer<'a> {
    pub fn new(templates: &'a TemplateSet) -> Self {
        Self { templates }
    }

    pub fn render(&self, kind: TemplateKind, request: &EntityRequest) -> Result<RenderedFile> {
        let template = self.templates.get(kind)?;
        let rendered = if kind.uses_entity() {
            template.render(request)
        } else {
            template.render(context! {})
        };
        let content = rendered.map_err(|source| Error::Render {
            template: kind.name(),
            source,
        })?;

        let path = kind.relative_path(request);
        tracing::debug!(template = kind.name(), path = %path.display(), "rendered template");

        Ok(RenderedFile {
            kind,
            path,
            content,
        })
    }

    /// Render every template in emission order, stopping at the first error.
    pub fn render_all(&self, request: &EntityRequest) -> Result<Vec<RenderedFile>> {
        TemplateKind::ALL
            .into_iter()
            .map(|kind| self.render(kind, request))
            .collect()
    }
}
