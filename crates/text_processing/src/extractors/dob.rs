//! Date of birth extraction

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates::parse_fuzzy;

static BIRTH_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:born on|date of birth is|dob is|i was born on)\s(.+)").unwrap()
});

/// Extract a date of birth
///
/// The phrase after "born on" and friends is parsed first. Without a usable
/// phrase the whole text is parsed, and that guess is kept only when its
/// year is before `cutoff_year`: a fuzzy parse of text with no real date
/// falls back to `today`'s year.
pub fn extract_dob(text: &str, today: NaiveDate, cutoff_year: i32) -> Option<NaiveDate> {
    if let Some(caps) = BIRTH_PHRASE.captures(text) {
        match parse_fuzzy(&caps[1], today) {
            Ok(date) => return Some(date),
            Err(e) => tracing::debug!(error = %e, "Birth phrase without a usable date"),
        }
    }

    match parse_fuzzy(text, today) {
        Ok(date) if date.year() < cutoff_year => Some(date),
        Ok(date) => {
            tracing::debug!(%date, cutoff_year, "Rejected fuzzy date at or after cutoff");
            None
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUTOFF: i32 = 2020;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birth_phrases() {
        assert_eq!(
            extract_dob("i was born on march 3rd 1990", today(), CUTOFF),
            Some(date(1990, 3, 3))
        );
        assert_eq!(
            extract_dob("my date of birth is 15/03/1988", today(), CUTOFF),
            Some(date(1988, 3, 15))
        );
        assert_eq!(
            extract_dob("dob is 1975-12-01 and my email is x@y.com", today(), CUTOFF),
            Some(date(1975, 12, 1))
        );
    }

    #[test]
    fn test_spoken_two_digit_year() {
        assert_eq!(
            extract_dob("i was born on 5 june 90", today(), CUTOFF),
            Some(date(1990, 6, 5))
        );
        assert_eq!(
            extract_dob("my date of birth is june 5th 85", today(), CUTOFF),
            Some(date(1985, 6, 5))
        );
    }

    #[test]
    fn test_phrase_stage_ignores_cutoff() {
        assert_eq!(
            extract_dob("she was born on june 5th 2021", today(), CUTOFF),
            Some(date(2021, 6, 5))
        );
    }

    #[test]
    fn test_fallback_without_phrase() {
        assert_eq!(
            extract_dob("my birthday is 21st june 1985", today(), CUTOFF),
            Some(date(1985, 6, 21))
        );
    }

    #[test]
    fn test_fallback_respects_cutoff() {
        assert_eq!(extract_dob("rate it a 4", today(), CUTOFF), None);
        assert_eq!(extract_dob("joined in 2021", today(), CUTOFF), None);
        assert_eq!(extract_dob("joined in 2021", today(), 2030), Some(date(2021, 10, 19)));
    }

    #[test]
    fn test_fallback_lone_number_beside_year_is_month() {
        assert_eq!(
            extract_dob("i was born in 1990 and i rate it a 4", today(), CUTOFF),
            Some(date(1990, 4, 19))
        );
        assert_eq!(
            extract_dob("i have 2 kids and was born in 1980", today(), CUTOFF),
            Some(date(1980, 2, 19))
        );
    }

    #[test]
    fn test_unusable_phrase_falls_through() {
        // "born on" with no date, but a date elsewhere in the text
        assert_eq!(
            extract_dob("april 2 1992, i was born on a sunday", today(), CUTOFF),
            Some(date(1992, 4, 2))
        );
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_dob("born on a rainy day", today(), CUTOFF), None);
        assert_eq!(extract_dob("february 30 1990", today(), CUTOFF), None);
        assert_eq!(extract_dob("", today(), CUTOFF), None);
    }
}
