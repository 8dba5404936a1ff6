//! Disabled recognizer

use async_trait::async_trait;
use voice_form_core::{EntityRecognizer, NamedEntity, Result};

/// Never finds any entity
#[derive(Debug, Default)]
pub struct NoopRecognizer;

impl NoopRecognizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EntityRecognizer for NoopRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<NamedEntity>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
