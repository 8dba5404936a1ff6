//! Form field extractors
//!
//! Each extractor reads normalized text (see [`crate::normalizer`]) and
//! either returns a fully formed value or nothing. Extractors never fail:
//! anything that cannot be interpreted is simply not detected.
//!
//! | Field        | Strategy                                            |
//! |--------------|-----------------------------------------------------|
//! | fullName     | intro phrase pattern, then named-entity fallback    |
//! | email        | first email-shaped substring                        |
//! | dob          | birth phrase + fuzzy date, then guarded fuzzy date  |
//! | gender       | keyword priority (female before male)               |
//! | interests    | keyword table, non-exclusive                        |
//! | satisfaction | standalone digit 1-5, then number words             |
//!
//! Static patterns are compiled once using `once_cell::sync::Lazy`.

mod dob;
mod email;
mod gender;
mod interests;
mod name;
mod rating;

pub use dob::extract_dob;
pub use email::extract_email;
pub use gender::extract_gender;
pub use interests::{extract_interests, INTEREST_KEYWORDS};
pub use name::{extract_name, extract_name_pattern};
pub use rating::{extract_rating, RATING_WORDS};

/// Title-case text the way the form expects names
///
/// A letter is upper-cased when the previous character is not a letter and
/// lower-cased otherwise, so "3rd" becomes "3Rd" and "o'neil" becomes "O'Neil".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
