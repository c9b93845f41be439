//! The generation pipeline: lay out directories, render, write.

use std::path::{Path, PathBuf};

use crudgen_core::{GeneratedFile, OutputLayout};

use crate::{
    error::Result,
    renderer::{RenderedFile, Renderer},
    request::EntityRequest,
    template::TemplateSet,
};

/// Outcome of a successful [`Generator::generate`] run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Output base directory.
    pub base: PathBuf,
    /// Files written, in emission order.
    pub written: Vec<PathBuf>,
}

/// Turns entity requests into scaffolds.
///
/// Owns the compiled [`TemplateSet`], so a single generator can serve any
/// number of requests without recompiling templates.
pub struct Generator {
    templates: TemplateSet,
}

impl Generator {
    pub fn new() -> Result<Self> {
        Ok(Self::with_templates(TemplateSet::new()?))
    }

    pub fn with_templates(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// Render every file without touching the disk.
    pub fn preview(&self, request: &EntityRequest) -> Result<Vec<RenderedFile>> {
        Renderer::new(&self.templates).render_all(request)
    }

    /// Write the scaffold for `request` under `base`.
    ///
    /// The directory tree is created first, then every template is rendered,
    /// then files are written in emission order. Existing files are
    /// overwritten. The first failure aborts the run and leaves whatever was
    /// already written in place.
    pub fn generate(&self, request: &EntityRequest, base: &Path) -> Result<GenerationReport> {
        let layout = OutputLayout::new(base);
        layout.create()?;

        let files = self.preview(request)?;

        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            written.push(file.write(layout.base())?);
        }

        tracing::info!(
            entity = request.entity(),
            files = written.len(),
            base = %base.display(),
            "generated scaffold"
        );

        Ok(GenerationReport {
            base: base.to_path_buf(),
            written,
        })
    }
}
