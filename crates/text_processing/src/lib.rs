//! Transcript processing for the voice form backend
//!
//! This crate turns a spoken transcript into structured form fields:
//! - **Normalization**: spoken email idioms ("dot", "at") and filler removal
//! - **Field extraction**: name, email, date of birth, gender, interests, rating
//! - **Date parsing**: fuzzy calendar dates inside free text
//! - **Named entities**: pluggable person recognizers for the name fallback
//!
//! # Example
//!
//! ```ignore
//! use voice_form_text_processing::FormExtractor;
//! use voice_form_config::ExtractionConfig;
//!
//! let extractor = FormExtractor::from_config(&ExtractionConfig::default());
//! let result = extractor.process("my name is john smith").await;
//! assert_eq!(result.data.full_name.as_deref(), Some("John Smith"));
//! ```

pub mod dates;
pub mod extractors;
pub mod ner;
pub mod normalizer;

mod pipeline;

pub use dates::{parse_fuzzy, DateParseError};
pub use extractors::{
    extract_dob, extract_email, extract_gender, extract_interests, extract_name,
    extract_name_pattern, extract_rating, title_case,
};
pub use ner::{
    create_recognizer, FallbackRecognizer, GazetteerRecognizer, HttpRecognizer, NoopRecognizer,
};
pub use normalizer::normalize;
pub use pipeline::FormExtractor;
