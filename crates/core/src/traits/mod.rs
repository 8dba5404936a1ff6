//! Core traits for the voice form backend
//!
//! Components behind these traits can be swapped by configuration and mocked
//! in tests.
//!
//! ```text
//! Text Processing:
//!   - EntityRecognizer: Text → tagged named-entity spans
//! ```

mod recognizer;

pub use recognizer::EntityRecognizer;
