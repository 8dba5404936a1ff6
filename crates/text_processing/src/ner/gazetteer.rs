//! First-name gazetteer recognizer
//!
//! Tags a person span wherever a known first name appears as a capitalized
//! word, extending it over the capitalized words that directly follow
//! ("Priya Sharma"). Input is expected to be title-cased, the same way a
//! statistical model would receive it.

use std::collections::HashSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use voice_form_config::{constants::extraction, NerConfig};
use voice_form_core::{EntityLabel, EntityRecognizer, NamedEntity, Result};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'\-]*").unwrap());

/// Built-in first names, lowercase
///
/// Words that double as common vocabulary ("may", "will", "mark", "joy")
/// are left out.
const BUILTIN_FIRST_NAMES: &[&str] = &[
    // English
    "adam", "alice", "amanda", "amelia", "andrew", "anna", "anthony", "benjamin", "brian",
    "charles", "charlotte", "chris", "christopher", "daniel", "david", "edward", "elizabeth",
    "emily", "emma", "george", "hannah", "harry", "henry", "isabella", "jack", "james", "jane",
    "jennifer", "jessica", "john", "jonathan", "joseph", "joshua", "karen", "kevin", "laura",
    "linda", "lisa", "lucy", "maria", "mary", "matthew", "michael", "michelle", "nancy",
    "nicholas", "olivia", "oliver", "patricia", "paul", "peter", "rachel", "richard", "robert",
    "ryan", "samuel", "sarah", "sophia", "steven", "susan", "thomas", "william",
    // Indian
    "aarav", "aditi", "aditya", "akash", "amit", "ananya", "anil", "anita", "anjali", "arjun",
    "deepak", "deepika", "divya", "gaurav", "ishaan", "kavya", "kiran", "krishna", "lakshmi",
    "manish", "meera", "neha", "nikhil", "pooja", "pradeep", "priya", "priyanka", "rahul",
    "rajesh", "ravi", "rohan", "rohit", "sanjay", "shreya", "sneha", "sunil", "suresh",
    "tanvi", "varun", "vikram", "vivek",
];

/// Words that never continue a name span
const SPAN_BREAK_WORDS: &[&str] = &[
    "a", "am", "an", "and", "are", "at", "but", "by", "calling", "for", "from", "here", "i",
    "in", "is", "it", "me", "my", "of", "on", "or", "please", "so", "speaking", "thanks",
    "the", "this", "to", "was", "with",
];

/// In-process person recognizer backed by a first-name list
pub struct GazetteerRecognizer {
    names: HashSet<String>,
    max_span_tokens: usize,
}

impl GazetteerRecognizer {
    /// Built-in names, default span length
    pub fn new() -> Self {
        Self {
            names: BUILTIN_FIRST_NAMES.iter().map(|n| n.to_string()).collect(),
            max_span_tokens: extraction::MAX_NAME_SPAN_TOKENS,
        }
    }

    pub fn from_config(config: &NerConfig) -> Self {
        Self::new()
            .with_names(&config.extra_names)
            .with_max_span_tokens(config.max_span_tokens)
    }

    /// Add names on top of the built-in list
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty()),
        );
        self
    }

    pub fn with_max_span_tokens(mut self, max_span_tokens: usize) -> Self {
        self.max_span_tokens = max_span_tokens.max(1);
        self
    }

    /// Number of known first names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Person spans in order of appearance
    pub fn find_people(&self, text: &str) -> Vec<NamedEntity> {
        let words: Vec<_> = WORD.find_iter(text).collect();
        let mut entities = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let word = words[i];
            if !is_capitalized(word.as_str()) || !self.names.contains(&word.as_str().to_lowercase())
            {
                i += 1;
                continue;
            }

            let start = word.start();
            let mut end = word.end();
            let mut taken = 1;

            while taken < self.max_span_tokens && i + taken < words.len() {
                let next = words[i + taken];
                let gap = &text[end..next.start()];
                if !gap.chars().all(char::is_whitespace)
                    || !is_capitalized(next.as_str())
                    || SPAN_BREAK_WORDS.contains(&next.as_str().to_lowercase().as_str())
                {
                    break;
                }
                end = next.end();
                taken += 1;
            }

            entities.push(NamedEntity::new(
                &text[start..end],
                EntityLabel::Person,
                start,
                end,
            ));
            i += taken;
        }

        entities
    }
}

impl Default for GazetteerRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

#[async_trait]
impl EntityRecognizer for GazetteerRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<NamedEntity>> {
        Ok(self.find_people(text))
    }

    fn name(&self) -> &str {
        "gazetteer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entities: &[NamedEntity]) -> Vec<&str> {
        entities.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_first_and_last_name() {
        let recognizer = GazetteerRecognizer::new();
        let text = "This Is Priya Sharma Calling From Pune";
        let people = recognizer.find_people(text);

        assert_eq!(texts(&people), vec!["Priya Sharma"]);
        assert_eq!(&text[people[0].start..people[0].end], "Priya Sharma");
        assert!(people[0].label.is_person());
    }

    #[test]
    fn test_span_stops_at_break_words_and_punctuation() {
        let recognizer = GazetteerRecognizer::new();
        assert_eq!(
            texts(&recognizer.find_people("Rahul Here, Call Back")),
            vec!["Rahul"]
        );
        assert_eq!(
            texts(&recognizer.find_people("Rahul, Sharma")),
            vec!["Rahul"]
        );
    }

    #[test]
    fn test_span_length_limit() {
        let text = "Anita Desai Kumar Rao";
        assert_eq!(
            texts(&GazetteerRecognizer::new().find_people(text)),
            vec!["Anita Desai"]
        );
        assert_eq!(
            texts(&GazetteerRecognizer::new().with_max_span_tokens(1).find_people(text)),
            vec!["Anita"]
        );
        assert_eq!(
            texts(&GazetteerRecognizer::new().with_max_span_tokens(3).find_people(text)),
            vec!["Anita Desai Kumar"]
        );
    }

    #[test]
    fn test_lowercase_is_ignored() {
        assert!(GazetteerRecognizer::new().find_people("priya sharma").is_empty());
    }

    #[test]
    fn test_no_names_in_form_answers() {
        let recognizer = GazetteerRecognizer::new();
        assert!(recognizer
            .find_people("I Love Music And Cricket, Rate Five Stars")
            .is_empty());
        assert!(recognizer.find_people("I Was Born On March 3Rd 1990").is_empty());
    }

    #[test]
    fn test_extra_names() {
        let recognizer = GazetteerRecognizer::new().with_names([" Zubin ", ""]);
        assert_eq!(
            texts(&recognizer.find_people("Zubin Mehta Speaking")),
            vec!["Zubin Mehta"]
        );
        assert_eq!(recognizer.len(), GazetteerRecognizer::new().len() + 1);
    }

    #[tokio::test]
    async fn test_recognize_returns_all_people_in_order() {
        let recognizer = GazetteerRecognizer::new();
        let people = recognizer
            .recognize("Emma And Rahul Kapoor Were There")
            .await
            .unwrap();
        assert_eq!(texts(&people), vec!["Emma", "Rahul Kapoor"]);
    }
}
