//! Satisfaction rating extraction

use once_cell::sync::Lazy;
use regex::Regex;

static RATING_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[1-5]\b").unwrap());

/// Spelled-out ratings, checked in this order
pub const RATING_WORDS: [(&str, u8); 5] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
];

/// Rating 1-5
///
/// A standalone digit anywhere in the text beats any number word. Number
/// words are matched as substrings in table order, not text order.
pub fn extract_rating(text: &str) -> Option<u8> {
    if let Some(m) = RATING_DIGIT.find(text) {
        return m.as_str().parse().ok();
    }

    RATING_WORDS
        .iter()
        .find(|(word, _)| text.contains(word))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_wins_over_word() {
        assert_eq!(extract_rating("rate it a 4, definitely not a two"), Some(4));
    }

    #[test]
    fn test_first_digit() {
        assert_eq!(extract_rating("3 or maybe 5"), Some(3));
    }

    #[test]
    fn test_digit_must_stand_alone() {
        assert_eq!(extract_rating("born in 1990"), None);
        assert_eq!(extract_rating("march 3rd"), None);
        assert_eq!(extract_rating("a solid 10"), None);
        assert_eq!(extract_rating("rating: 6"), None);
    }

    #[test]
    fn test_number_words() {
        assert_eq!(extract_rating("rate five stars"), Some(5));
        assert_eq!(extract_rating("i would say three"), Some(3));
    }

    #[test]
    fn test_word_table_order() {
        // "two" is checked before "five" regardless of position
        assert_eq!(extract_rating("five, no, two"), Some(2));
        // Substring match inside a longer word
        assert_eq!(extract_rating("someone told me"), Some(1));
    }

    #[test]
    fn test_no_rating() {
        assert_eq!(extract_rating("no opinion"), None);
        assert_eq!(extract_rating(""), None);
    }
}
