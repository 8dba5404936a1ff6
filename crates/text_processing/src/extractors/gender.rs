//! Gender extraction

use voice_form_core::Gender;

/// Keyword for each gender, in match priority
///
/// "female" contains "male", so it must be checked first.
const GENDER_KEYWORDS: [(&str, Gender); 3] = [
    ("female", Gender::Female),
    ("male", Gender::Male),
    ("other", Gender::Other),
];

pub fn extract_gender(text: &str) -> Option<Gender> {
    GENDER_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, gender)| *gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gender() {
        assert_eq!(extract_gender("i am male"), Some(Gender::Male));
        assert_eq!(extract_gender("i am a female"), Some(Gender::Female));
        assert_eq!(extract_gender("put other"), Some(Gender::Other));
        assert_eq!(extract_gender("rather not say"), None);
    }

    #[test]
    fn test_female_wins_over_male() {
        assert_eq!(
            extract_gender("not male, i am female"),
            Some(Gender::Female)
        );
    }

    #[test]
    fn test_substring_matches() {
        assert_eq!(extract_gender("my mother is a teacher"), Some(Gender::Other));
    }
}
