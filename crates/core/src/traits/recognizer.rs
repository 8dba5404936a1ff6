//! Named-entity recognition interface

use async_trait::async_trait;

use crate::{NamedEntity, Result};

/// Named-entity recognition interface
///
/// Implementations:
/// - `GazetteerRecognizer` - In-process first-name lookup
/// - `HttpRecognizer` - NER model served by a sidecar
/// - `NoopRecognizer` - Disabled, never finds anything
///
/// A recognizer is built once at startup and shared read-only between
/// requests, hence `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// let recognizer: Arc<dyn EntityRecognizer> = Arc::new(GazetteerRecognizer::new());
/// let entities = recognizer.recognize("Hey It Is Priya Sharma").await?;
/// let person = entities.iter().find(|e| e.label.is_person());
/// ```
#[async_trait]
pub trait EntityRecognizer: Send + Sync + 'static {
    /// Tag entities in text
    ///
    /// # Returns
    /// Spans in order of appearance
    async fn recognize(&self, text: &str) -> Result<Vec<NamedEntity>>;

    /// Provider name for logs and readiness reporting
    fn name(&self) -> &str;

    /// Check if recognizer can produce entities at all
    fn is_enabled(&self) -> bool {
        true
    }
}
