//! Template rendering for the crudgen scaffold generator.
//!
//! # Module Organization
//!
//! - [`request`] - The entity request the templates are rendered against
//! - [`template`] - The fixed template set and output paths
//! - [`renderer`] - Binding a request to templates
//! - [`generator`] - Layout, render and write pipeline

mod error;
pub mod generator;
pub mod renderer;
pub mod request;
pub mod template;

pub use error::{Error, Result};
pub use generator::{GenerationReport, Generator};
pub use renderer::{RenderedFile, Renderer};
pub use request::{EntityRequest, EntityRequestBuilder, Field};
pub use template::{TemplateKind, TemplateSet};
