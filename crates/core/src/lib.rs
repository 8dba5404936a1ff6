//! Core traits and types for the voice form backend
//!
//! This crate provides foundational types used across all other crates:
//! - Form field types (name, email, date of birth, gender, interests, rating)
//! - The per-request extraction result and its status flag
//! - Named-entity types and the pluggable `EntityRecognizer` trait
//! - Error types

pub mod error;
pub mod fields;
pub mod ner;
pub mod traits;

pub use error::{Error, Result};
pub use fields::{
    ExtractedFields, ExtractionResult, ExtractionStatus, FieldValue, FormField, Gender, Interest,
};
pub use ner::{EntityLabel, NamedEntity};
pub use traits::EntityRecognizer;
