//! Primary recognizer with a fallback on error

use std::sync::Arc;

use async_trait::async_trait;
use voice_form_core::{EntityRecognizer, NamedEntity, Result};

/// Uses `fallback` whenever `primary` fails
pub struct FallbackRecognizer {
    primary: Arc<dyn EntityRecognizer>,
    fallback: Arc<dyn EntityRecognizer>,
    name: String,
}

impl FallbackRecognizer {
    pub fn new(primary: Arc<dyn EntityRecognizer>, fallback: Arc<dyn EntityRecognizer>) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl EntityRecognizer for FallbackRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<NamedEntity>> {
        match self.primary.recognize(text).await {
            Ok(entities) => Ok(entities),
            Err(e) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "Primary recognizer failed, using fallback"
                );
                self.fallback.recognize(text).await
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.primary.is_enabled() || self.fallback.is_enabled()
    }
}
