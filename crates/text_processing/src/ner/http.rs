//! NER sidecar client
//!
//! Talks to a statistical NER model served over HTTP.
//!
//! Request: `POST {endpoint}` with `{"text": "..."}`
//!
//! Response:
//! ```json
//! {"entities": [{"text": "John Smith", "label": "PERSON", "start": 11, "end": 21}]}
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use voice_form_config::NerConfig;
use voice_form_core::{EntityRecognizer, Error, NamedEntity, Result};

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    #[serde(default)]
    entities: Vec<NamedEntity>,
}

/// Recognizer backed by an HTTP sidecar
pub struct HttpRecognizer {
    client: Client,
    endpoint: String,
}

impl HttpRecognizer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &NerConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EntityRecognizer for HttpRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<NamedEntity>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&NerRequest { text })
            .send()
            .await
            .map_err(|e| Error::Http(format!("NER request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http(format!(
                "NER sidecar returned {}: {}",
                status, body
            )));
        }

        let parsed: NerResponse = response
            .json()
            .await
            .map_err(|e| Error::Recognizer(format!("Failed to parse NER response: {}", e)))?;

        tracing::trace!(entities = parsed.entities.len(), "NER sidecar response");
        Ok(parsed.entities)
    }

    fn name(&self) -> &str {
        "http"
    }
}
