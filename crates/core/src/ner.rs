//! Named-entity types
//!
//! Mirrors the shape of a typical NER model output: an ordered list of text
//! spans, each tagged with a category label.

use serde::{Deserialize, Serialize};

/// Category label attached to a span
///
/// Parses spaCy/CoNLL style tags ("PERSON", "PER", "ORG", "GPE", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Date,
    Other(String),
}

impl EntityLabel {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "GPE" | "LOC" | "LOCATION" => EntityLabel::Location,
            "DATE" => EntityLabel::Date,
            _ => EntityLabel::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORG",
            EntityLabel::Location => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Other(label) => label,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, EntityLabel::Person)
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        EntityLabel::parse(&label)
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

/// A tagged span of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Span text as it appears in the input
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the span start
    #[serde(default)]
    pub start: usize,
    /// Byte offset one past the span end
    #[serde(default)]
    pub end: usize,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }
}
