//! Transcript to form fields
//!
//! One pass: normalize once, run every extractor on the same normalized
//! text, keep whatever was detected.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use voice_form_config::ExtractionConfig;
use voice_form_core::{EntityRecognizer, ExtractedFields, ExtractionResult};

use crate::{extractors, ner, normalizer};

/// Form field extraction pipeline
///
/// Immutable once built; share it behind an `Arc`.
pub struct FormExtractor {
    config: ExtractionConfig,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl FormExtractor {
    pub fn new(config: ExtractionConfig, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { config, recognizer }
    }

    /// Build with the recognizer selected by `config.ner`
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let recognizer = ner::create_recognizer(&config.ner);
        Self::new(config.clone(), recognizer)
    }

    /// Extract form fields from a raw transcript
    pub async fn process(&self, raw: &str) -> ExtractionResult {
        self.process_on(raw, Local::now().date_naive()).await
    }

    /// Extract form fields with `today` as the reference date
    ///
    /// Dates with missing parts are completed from `today`.
    pub async fn process_on(&self, raw: &str, today: NaiveDate) -> ExtractionResult {
        let text = normalizer::normalize(raw);

        let fields = ExtractedFields {
            full_name: extractors::extract_name(&text, self.recognizer.as_ref()).await,
            email: extractors::extract_email(&text),
            dob: extractors::extract_dob(&text, today, self.config.dob_year_cutoff),
            gender: extractors::extract_gender(&text),
            interests: extractors::extract_interests(&text),
            satisfaction: extractors::extract_rating(&text),
        };

        tracing::debug!(
            normalized_len = text.len(),
            fields = ?fields.detected(),
            "Extracted form fields"
        );

        ExtractionResult::new(fields, raw)
    }

    /// Name of the recognizer behind the name fallback
    pub fn recognizer_name(&self) -> &str {
        self.recognizer.name()
    }

    pub fn recognizer_enabled(&self) -> bool {
        self.recognizer.is_enabled()
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_form_config::{NerConfig, NerProvider};
    use voice_form_core::{ExtractionStatus, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn extractor() -> FormExtractor {
        FormExtractor::from_config(&ExtractionConfig::default())
    }

    #[tokio::test]
    async fn test_all_fields() {
        let raw = "Hi, I'm Ravi Patel, my email is ravi at example dot com. \
                   I was born on 12/05/1992, male, into coding and football. I'd give it 5";
        let result = extractor().process_on(raw, today()).await;

        assert_eq!(result.status, ExtractionStatus::Found);
        assert_eq!(result.raw_transcript, raw);
        assert_eq!(result.data.full_name.as_deref(), Some("Ravi Patel"));
        assert_eq!(result.data.email.as_deref(), Some("ravi@example.com"));
        assert_eq!(result.data.dob, NaiveDate::from_ymd_opt(1992, 12, 5));
        assert_eq!(result.data.gender, Some(Gender::Male));
        assert_eq!(result.data.interests.len(), 2);
        assert_eq!(result.data.satisfaction, Some(5));
        assert_eq!(result.data.len(), 6);
    }

    #[tokio::test]
    async fn test_empty_transcript() {
        let result = extractor().process_on("", today()).await;
        assert_eq!(result.status, ExtractionStatus::NotFound);
        assert!(result.data.is_empty());
        assert_eq!(result.raw_transcript, "");
    }

    #[tokio::test]
    async fn test_cutoff_comes_from_config() {
        let config = ExtractionConfig {
            dob_year_cutoff: 2030,
            ..Default::default()
        };
        let extractor = FormExtractor::from_config(&config);

        let result = extractor.process_on("joined in 2024", today()).await;
        assert_eq!(result.data.dob, NaiveDate::from_ymd_opt(2024, 10, 19));

        let result = FormExtractor::from_config(&ExtractionConfig::default())
            .process_on("joined in 2024", today())
            .await;
        assert_eq!(result.data.dob, None);
    }

    #[tokio::test]
    async fn test_disabled_recognizer_skips_name_fallback() {
        let config = ExtractionConfig {
            ner: NerConfig {
                provider: NerProvider::Disabled,
                ..Default::default()
            },
            ..Default::default()
        };
        let extractor = FormExtractor::from_config(&config);
        assert_eq!(extractor.recognizer_name(), "disabled");

        let result = extractor.process_on("this is priya sharma", today()).await;
        assert_eq!(result.data.full_name, None);

        let result = self::extractor()
            .process_on("this is priya sharma", today())
            .await;
        assert_eq!(result.data.full_name.as_deref(), Some("Priya Sharma"));
    }
}
