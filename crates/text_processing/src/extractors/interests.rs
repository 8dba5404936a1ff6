//! Interest extraction

use std::collections::BTreeSet;

use voice_form_core::Interest;

/// Substrings that indicate each interest
pub const INTEREST_KEYWORDS: &[(Interest, &[&str])] = &[
    (Interest::Music, &["music"]),
    (Interest::Sports, &["sports", "cricket", "football"]),
    (Interest::Tech, &["tech", "coding", "programming"]),
];

/// Every interest with at least one keyword present; possibly empty
pub fn extract_interests(text: &str) -> BTreeSet<Interest> {
    INTEREST_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(interest, _)| *interest)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_interests() {
        let interests = extract_interests("i love music and cricket");
        assert_eq!(
            interests.into_iter().collect::<Vec<_>>(),
            vec![Interest::Music, Interest::Sports]
        );
    }

    #[test]
    fn test_synonyms_collapse() {
        let interests = extract_interests("football, sports and more sports");
        assert_eq!(interests.len(), 1);
        assert!(interests.contains(&Interest::Sports));
    }

    #[test]
    fn test_tech_keywords() {
        for text in ["i work in tech", "coding all day", "competitive programming"] {
            assert!(extract_interests(text).contains(&Interest::Tech), "{}", text);
        }
        // Substring match
        assert!(extract_interests("the technician").contains(&Interest::Tech));
    }

    #[test]
    fn test_no_interests() {
        assert!(extract_interests("i like reading").is_empty());
        assert!(extract_interests("").is_empty());
    }
}
