//! Email address extraction

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}").unwrap());

/// First email-shaped substring, verbatim
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("my email is john.smith@gmail.com thanks"),
            Some("john.smith@gmail.com".to_string())
        );
        assert_eq!(
            extract_email("reach me at a_b-c+tag%x@mail.example.co.in"),
            Some("a_b-c+tag%x@mail.example.co.in".to_string())
        );
    }

    #[test]
    fn test_first_address_wins() {
        assert_eq!(
            extract_email("first@one.com or second@two.org"),
            Some("first@one.com".to_string())
        );
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("my email is john at gmail"), None);
        assert_eq!(extract_email("user@localhost"), None);
        assert_eq!(extract_email("john@gmail.c"), None);
        assert_eq!(extract_email(""), None);
    }
}
