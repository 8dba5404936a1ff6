//! Named-entity recognizers for the name fallback
//!
//! Providers:
//! - `gazetteer` - in-process first-name list (default, no external service)
//! - `http` - statistical NER model behind a sidecar, optionally backed by
//!   the gazetteer when the sidecar fails
//! - `disabled` - never finds a name

mod fallback;
mod gazetteer;
mod http;
mod noop;

pub use fallback::FallbackRecognizer;
pub use gazetteer::GazetteerRecognizer;
pub use http::HttpRecognizer;
pub use noop::NoopRecognizer;

use std::sync::Arc;

use voice_form_config::{NerConfig, NerProvider};
use voice_form_core::EntityRecognizer;

/// Create recognizer based on config
pub fn create_recognizer(config: &NerConfig) -> Arc<dyn EntityRecognizer> {
    match config.provider {
        NerProvider::Gazetteer => {
            let gazetteer = GazetteerRecognizer::from_config(config);
            tracing::info!(names = gazetteer.len(), "Using gazetteer name recognizer");
            Arc::new(gazetteer)
        }
        NerProvider::Http => match HttpRecognizer::from_config(config) {
            Ok(http) => {
                let primary: Arc<dyn EntityRecognizer> = Arc::new(http);
                if config.fallback_to_gazetteer {
                    tracing::info!(
                        endpoint = %config.endpoint,
                        "Using NER sidecar with gazetteer fallback"
                    );
                    let fallback = Arc::new(GazetteerRecognizer::from_config(config));
                    Arc::new(FallbackRecognizer::new(primary, fallback))
                } else {
                    tracing::info!(endpoint = %config.endpoint, "Using NER sidecar (no fallback)");
                    primary
                }
            }
            Err(e) => {
                if config.fallback_to_gazetteer {
                    tracing::warn!(
                        error = %e,
                        "Failed to create NER sidecar client, using gazetteer"
                    );
                    Arc::new(GazetteerRecognizer::from_config(config))
                } else {
                    tracing::warn!(
                        error = %e,
                        "Failed to create NER sidecar client, name fallback disabled"
                    );
                    Arc::new(NoopRecognizer::new())
                }
            }
        },
        NerProvider::Disabled => Arc::new(NoopRecognizer::new()),
    }
}
