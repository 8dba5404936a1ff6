//! Transcript normalization
//!
//! Turns dictated text into something the field extractors can pattern-match:
//! lower-case, spoken symbols ("john dot doe at gmail dot com") rewritten to
//! literal characters, filler words dropped, outer whitespace trimmed.
//!
//! Both rewrites are plain substring operations without word boundaries. A
//! filler inside a longer word is removed too ("think" loses its "hi"), and
//! extraction results depend on that behaviour.

/// Spoken forms of symbols, applied in this order
pub const SPOKEN_SYMBOLS: [(&str, &str); 4] = [
    (" at ", "@"),
    (" dot ", "."),
    (" underscore ", "_"),
    (" dash ", "-"),
];

/// Filler substrings, deleted in this order
pub const FILLER_WORDS: [&str; 6] = ["uh", "um", "hello", "hi", "okay", "ok"];

/// Normalize a raw transcript
///
/// Never fails; may return an empty string.
pub fn normalize(text: &str) -> String {
    let mut result = text.to_lowercase();

    for (spoken, symbol) in SPOKEN_SYMBOLS {
        result = result.replace(spoken, symbol);
    }

    for filler in FILLER_WORDS {
        result = result.replace(filler, "");
    }

    result.trim().to_string()
}
