//! Fuzzy calendar date parsing
//!
//! Finds the most plausible calendar date in free text, skipping words that
//! carry no date information ("i was born on march 3rd 1990 in pune").
//! Parts that are not mentioned default to the reference date, so a lone
//! "4" parses as the 4th of the reference month. Callers that must not pick
//! up such defaults apply their own plausibility checks.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Why no date could be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("String does not contain a date")]
    NoDate,

    #[error("Date out of range: {year}-{month}-{day}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

static NUMERIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})[/.\-](\d{1,2})[/.\-](\d{1,4})$").unwrap());

static ORDINAL_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)$").unwrap());

static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?(?:am|pm)?$").unwrap());

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Date parts collected while scanning tokens
#[derive(Debug, Default)]
struct DateParts {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    /// Bare numbers 1-31 whose role is decided after the scan
    bare: Vec<u32>,
    found: bool,
}

impl DateParts {
    fn set_year(&mut self, year: i32) {
        self.year.get_or_insert(year);
        self.found = true;
    }

    fn set_month(&mut self, month: u32) {
        self.month.get_or_insert(month);
        self.found = true;
    }

    fn set_day(&mut self, day: u32) {
        self.day.get_or_insert(day);
        self.found = true;
    }

    /// Assign bare numbers to month/day, month-first
    ///
    /// A lone number is the day, unless a year was given, in which case it
    /// is the month. A number left over once month and day are known is a
    /// two-digit year.
    fn resolve_bare(&mut self, today: NaiveDate) {
        let bare = std::mem::take(&mut self.bare);
        let mut numbers = bare.into_iter();

        match (self.month, self.day) {
            (None, None) => match (numbers.next(), numbers.next()) {
                (Some(first), Some(second)) => {
                    if first <= 12 {
                        self.month = Some(first);
                        self.day = Some(second);
                    } else if second <= 12 {
                        self.day = Some(first);
                        self.month = Some(second);
                    } else {
                        self.day = Some(first);
                    }
                }
                (Some(only), None) if self.year.is_some() && only <= 12 => {
                    self.month = Some(only)
                }
                (Some(only), None) => self.day = Some(only),
                _ => {}
            },
            (Some(_), None) => self.day = numbers.next(),
            (None, Some(_)) => self.month = numbers.find(|n| *n <= 12),
            (Some(_), Some(_)) => {}
        }

        if self.year.is_none() {
            if let Some(short) = numbers.next() {
                self.year = Some(expand_two_digit_year(short as i32, today));
            }
        }
    }
}

/// Parse the most plausible date in `text`
///
/// `today` supplies any part the text does not mention.
pub fn parse_fuzzy(text: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let mut parts = DateParts::default();

    for raw in text.split(|c: char| c.is_whitespace() || c == ',') {
        if raw.is_empty() || raw.contains('@') {
            continue;
        }
        let token = raw
            .trim_matches(|c: char| matches!(c, '.' | '!' | '?' | ';' | '(' | ')' | '"' | '\''))
            .to_lowercase();
        if token.is_empty() {
            continue;
        }

        if let Some(caps) = NUMERIC_DATE.captures(&token) {
            scan_numeric_date(&caps[1], &caps[2], &caps[3], today, &mut parts);
        } else if let Some(month) = month_from_name(&token) {
            parts.set_month(month);
        } else if let Some(caps) = ORDINAL_DAY.captures(&token) {
            if let Ok(day) = caps[1].parse::<u32>() {
                if (1..=31).contains(&day) {
                    parts.set_day(day);
                }
            }
        } else if token.chars().all(|c| c.is_ascii_digit()) {
            scan_number(&token, today, &mut parts);
        } else if CLOCK_TIME.is_match(&token) {
            parts.found = true;
        }
    }

    if !parts.found {
        return Err(DateParseError::NoDate);
    }

    parts.resolve_bare(today);

    let year = parts.year.unwrap_or_else(|| today.year());
    let month = parts.month.unwrap_or_else(|| today.month());

    match parts.day {
        Some(day) => NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateParseError::OutOfRange { year, month, day }),
        None => {
            let last = last_day_of_month(year, month).ok_or(DateParseError::OutOfRange {
                year,
                month,
                day: today.day(),
            })?;
            let day = today.day().min(last);
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(DateParseError::OutOfRange { year, month, day })
        }
    }
}

fn month_from_name(token: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, month)| *month)
}

fn scan_number(token: &str, today: NaiveDate, parts: &mut DateParts) {
    let Ok(value) = token.parse::<u32>() else {
        return;
    };

    match (token.len(), value) {
        (4, _) => parts.set_year(value as i32),
        (1..=2, 1..=31) => {
            parts.bare.push(value);
            parts.found = true;
        }
        (2, 32..=99) => parts.set_year(expand_two_digit_year(value as i32, today)),
        _ => {}
    }
}

fn scan_numeric_date(
    first: &str,
    second: &str,
    third: &str,
    today: NaiveDate,
    parts: &mut DateParts,
) {
    let (Ok(a), Ok(b), Ok(c)) = (
        first.parse::<u32>(),
        second.parse::<u32>(),
        third.parse::<u32>(),
    ) else {
        return;
    };

    let (year_str, year, month, day) = if first.len() == 4 {
        (first, a, b, c)
    } else if a > 12 {
        (third, c, b, a)
    } else {
        (third, c, a, b)
    };

    let year = if year_str.len() <= 2 {
        expand_two_digit_year(year as i32, today)
    } else {
        year as i32
    };

    parts.set_year(year);
    parts.set_month(month);
    parts.set_day(day);
}

/// Place a two-digit year within 50 years of the reference date
fn expand_two_digit_year(short: i32, today: NaiveDate) -> i32 {
    let current = today.year();
    let mut year = short + current / 100 * 100;
    if year >= current + 50 {
        year -= 100;
    } else if year < current - 50 {
        year += 100;
    }
    year
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    first_of_next.pred_opt().map(|d| d.day())
}
