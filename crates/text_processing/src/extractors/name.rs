//! Full name extraction
//!
//! Two stages: an explicit introduction ("my name is ...", "i am ...") is
//! cheap and precise, so it is tried first. Only when no introduction is found
//! is the whole text handed to the named-entity recognizer.

use once_cell::sync::Lazy;
use regex::Regex;
use voice_form_core::EntityRecognizer;

use super::title_case;

static INTRO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:my name is|i am|i'm)\s([a-zA-Z ]{3,})").unwrap());

/// Words that end a name run ("john smith and my email is ...")
const NAME_BREAK_WORDS: &[&str] = &[
    "a", "also", "am", "an", "and", "at", "born", "but", "email", "from", "here", "i", "in",
    "is", "just", "living", "my", "not", "of", "on", "or", "really", "so", "the", "to", "very",
    "was", "who", "with",
];

/// Pattern stage only
///
/// Captures the letters-and-spaces run after an introduction, cuts it at the
/// first word that cannot be part of a name and title-cases the rest.
pub fn extract_name_pattern(text: &str) -> Option<String> {
    INTRO_PATTERN.captures_iter(text).find_map(|caps| {
        let run = caps.get(1)?.as_str();
        let words: Vec<String> = run
            .split_whitespace()
            .take_while(|word| !NAME_BREAK_WORDS.contains(&word.to_lowercase().as_str()))
            .map(title_case)
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    })
}

/// Extract the speaker's full name
///
/// Falls back to the first person entity the recognizer finds in the
/// title-cased text. Recognizer failures count as "no name".
pub async fn extract_name(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    if let Some(name) = extract_name_pattern(text) {
        return Some(name);
    }

    if text.is_empty() || !recognizer.is_enabled() {
        return None;
    }

    let titled = title_case(text);
    match recognizer.recognize(&titled).await {
        Ok(entities) => entities
            .into_iter()
            .find(|entity| entity.label.is_person())
            .map(|entity| entity.text.trim().to_string())
            .filter(|name| !name.is_empty()),
        Err(e) => {
            tracing::warn!(
                recognizer = recognizer.name(),
                error = %e,
                "Named-entity fallback failed, leaving name empty"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use voice_form_core::{EntityLabel, Error, NamedEntity, Result};

    struct FixedRecognizer {
        entities: Vec<NamedEntity>,
        calls: Mutex<Vec<String>>,
    }

    impl FixedRecognizer {
        fn new(entities: Vec<NamedEntity>) -> Self {
            Self {
                entities,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EntityRecognizer for FixedRecognizer {
        async fn recognize(&self, text: &str) -> Result<Vec<NamedEntity>> {
            self.calls.lock().unwrap().push(text.to_string());
            Ok(self.entities.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingRecognizer;

    #[async_trait]
    impl EntityRecognizer for FailingRecognizer {
        async fn recognize(&self, _text: &str) -> Result<Vec<NamedEntity>> {
            Err(Error::Http("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_pattern_stops_at_clause_words() {
        let text = "my name is john smith and my email is john.smith@gmail.com";
        assert_eq!(extract_name_pattern(text), Some("John Smith".to_string()));
    }

    #[test]
    fn test_pattern_variants() {
        assert_eq!(
            extract_name_pattern("i am priya sharma"),
            Some("Priya Sharma".to_string())
        );
        assert_eq!(
            extract_name_pattern("i'm rahul from pune"),
            Some("Rahul".to_string())
        );
        assert_eq!(
            extract_name_pattern("My Name Is ANITA DESAI"),
            Some("Anita Desai".to_string())
        );
    }

    #[test]
    fn test_pattern_requires_three_letters() {
        assert_eq!(extract_name_pattern("i am 25"), None);
        assert_eq!(extract_name_pattern("my name is jo"), None);
    }

    #[test]
    fn test_pattern_skips_intro_without_name() {
        assert_eq!(
            extract_name_pattern("i am a student and my name is meera nair"),
            Some("Meera Nair".to_string())
        );
        assert_eq!(extract_name_pattern("i am a student"), None);
    }

    #[tokio::test]
    async fn test_pattern_wins_without_calling_recognizer() {
        let recognizer = FixedRecognizer::new(vec![NamedEntity::new(
            "Someone Else",
            EntityLabel::Person,
            0,
            12,
        )]);

        let name = extract_name("my name is john smith", &recognizer).await;
        assert_eq!(name, Some("John Smith".to_string()));
        assert!(recognizer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_uses_first_person_on_title_cased_text() {
        let recognizer = FixedRecognizer::new(vec![
            NamedEntity::new("Pune", EntityLabel::Location, 0, 4),
            NamedEntity::new("Priya Sharma", EntityLabel::Person, 10, 22),
            NamedEntity::new("Rahul", EntityLabel::Person, 30, 35),
        ]);

        let name = extract_name("this is priya sharma calling from pune", &recognizer).await;
        assert_eq!(name, Some("Priya Sharma".to_string()));
        assert_eq!(
            recognizer.calls(),
            vec!["This Is Priya Sharma Calling From Pune".to_string()]
        );
    }

    #[tokio::test]
    async fn test_intro_without_name_words_falls_back() {
        let recognizer = FixedRecognizer::new(Vec::new());
        assert_eq!(extract_name("i am a student", &recognizer).await, None);
        assert_eq!(recognizer.calls(), vec!["I Am A Student".to_string()]);

        let recognizer = FixedRecognizer::new(vec![NamedEntity::new(
            "Meera",
            EntityLabel::Person,
            19,
            24,
        )]);
        assert_eq!(
            extract_name("i am a student and meera here", &recognizer).await,
            Some("Meera".to_string())
        );
    }

    #[tokio::test]
    async fn test_fallback_without_person() {
        let recognizer =
            FixedRecognizer::new(vec![NamedEntity::new("Pune", EntityLabel::Location, 0, 4)]);
        assert_eq!(extract_name("calling from pune", &recognizer).await, None);
    }

    #[tokio::test]
    async fn test_recognizer_failure_is_no_match() {
        assert_eq!(extract_name("calling from pune", &FailingRecognizer).await, None);
    }

    #[tokio::test]
    async fn test_empty_text_skips_recognizer() {
        let recognizer = FixedRecognizer::new(Vec::new());
        assert_eq!(extract_name("", &recognizer).await, None);
        assert!(recognizer.calls().is_empty());
    }
}
