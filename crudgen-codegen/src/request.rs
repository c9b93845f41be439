//! The in-memory description of one generation run.

use crudgen_core::to_lower;
use serde::Serialize;

/// A named, typed attribute of the entity.
///
/// The type is an opaque string copied verbatim into generated declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }
}

/// Everything the templates are rendered against.
///
/// Built once per run through [`EntityRequestBuilder`] and never mutated.
/// Serializes to the template context `{ project, entity, fields }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRequest {
    project: String,
    entity: String,
    fields: Vec<Field>,
}

impl EntityRequest {
    pub fn builder(project: impl Into<String>, entity: impl Into<String>) -> EntityRequestBuilder {
        EntityRequestBuilder::new(project, entity)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Entity name exactly as entered, used for type and function identifiers.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Fields in input order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Lowercased entity name, used for file names and route parameters.
    pub fn entity_lower(&self) -> String {
        to_lower(&self.entity)
    }

    /// Collection name and URL segment (`Order` -> `orders`).
    pub fn collection(&self) -> String {
        format!("{}s", self.entity_lower())
    }
}

/// Assembles an [`EntityRequest`] from collected input.
///
/// No validation happens here: empty project or entity names and duplicate
/// field names pass through unchanged.
#[derive(Debug, Clone)]
pub struct EntityRequestBuilder {
    project: String,
    entity: String,
    fields: Vec<Field>,
}

impl EntityRequestBuilder {
    pub fn new(project: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            entity: entity.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Fields with an empty name are dropped.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push_field(name, ty);
        self
    }

    /// Non-consuming variant of [`field`](Self::field) for input loops.
    pub fn push_field(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.fields.push(Field::new(name, ty));
    }

    pub fn build(self) -> EntityRequest {
        EntityRequest {
            project: self.project,
            entity: self.entity,
            fields: self.fields,
        }
    }
}
