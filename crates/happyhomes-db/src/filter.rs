//! Equality filters.
//!
//! A [`Filter`] is a conjunction of `field == value` conditions on top-level
//! document fields. An empty filter matches every document.

use serde_json::Value;

use crate::document::{Document, ID_FIELD};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::eq(ID_FIELD, id.into())
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self::eq("email", email.into())
    }

    /// Adds a condition. A later condition on the same field replaces the earlier one.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.conditions.iter_mut().find(|(f, _)| *f == field) {
            Some(existing) => existing.1 = value,
            None => self.conditions.push((field, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// The filter as a JSON object, e.g. for JSONB containment queries.
    pub fn to_document(&self) -> Document {
        self.conditions.iter().cloned().collect()
    }
}
