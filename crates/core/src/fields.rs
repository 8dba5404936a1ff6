//! Form field types
//!
//! A transcript is mapped onto a fixed set of six form fields. Only fields that
//! were actually detected are carried in [`ExtractedFields`]; an undetected
//! field is absent rather than null, both in memory and on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Names of the form fields, in canonical output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    Dob,
    Gender,
    Interests,
    Satisfaction,
}

impl FormField {
    /// All fields in canonical order
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::Email,
        FormField::Dob,
        FormField::Gender,
        FormField::Interests,
        FormField::Satisfaction,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Dob => "dob",
            FormField::Gender => "gender",
            FormField::Interests => "interests",
            FormField::Satisfaction => "satisfaction",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender as offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }
}

/// Interest categories from the form's fixed vocabulary
///
/// Ordering follows declaration order, which is also the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interest {
    Music,
    Sports,
    Tech,
}

impl Interest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Music => "Music",
            Interest::Sports => "Sports",
            Interest::Tech => "Tech",
        }
    }
}

/// A typed field value, as yielded by [`ExtractedFields::fields`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Gender(Gender),
    Interests(BTreeSet<Interest>),
    Rating(u8),
}

/// Fields detected in one transcript
///
/// Serializes to a JSON object that only contains the detected keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, serialized as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub interests: BTreeSet<Interest>,
    /// Satisfaction rating, 1 to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<u8>,
}

impl ExtractedFields {
    /// Check if no field was detected
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.dob.is_none()
            && self.gender.is_none()
            && self.interests.is_empty()
            && self.satisfaction.is_none()
    }

    /// Number of detected fields
    pub fn len(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    /// Value of a single field, if detected
    pub fn get(&self, field: FormField) -> Option<FieldValue> {
        match field {
            FormField::FullName => self.full_name.clone().map(FieldValue::Text),
            FormField::Email => self.email.clone().map(FieldValue::Text),
            FormField::Dob => self.dob.map(FieldValue::Date),
            FormField::Gender => self.gender.map(FieldValue::Gender),
            FormField::Interests => {
                if self.interests.is_empty() {
                    None
                } else {
                    Some(FieldValue::Interests(self.interests.clone()))
                }
            }
            FormField::Satisfaction => self.satisfaction.map(FieldValue::Rating),
        }
    }

    /// Detected fields with their values, in canonical order
    pub fn fields(&self) -> Vec<(FormField, FieldValue)> {
        FormField::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|value| (*field, value)))
            .collect()
    }

    /// Names of the detected fields, in canonical order
    pub fn detected(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }
}

/// Overall outcome of one extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionStatus {
    #[serde(rename = "Mapped successfully")]
    Found,
    #[serde(rename = "No clear data found")]
    NotFound,
}

impl ExtractionStatus {
    /// Status implied by a set of fields
    pub fn from_fields(fields: &ExtractedFields) -> Self {
        if fields.is_empty() {
            ExtractionStatus::NotFound
        } else {
            ExtractionStatus::Found
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ExtractionStatus::Found)
    }

    /// Wire message for the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStatus::Found => "Mapped successfully",
            ExtractionStatus::NotFound => "No clear data found",
        }
    }
}

/// Result returned to the caller for one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected fields only
    pub data: ExtractedFields,
    /// Found if `data` is non-empty
    pub status: ExtractionStatus,
    /// Transcript exactly as received
    pub raw_transcript: String,
}

impl ExtractionResult {
    /// Build a result, deriving the status from the fields
    pub fn new(data: ExtractedFields, raw_transcript: impl Into<String>) -> Self {
        let status = ExtractionStatus::from_fields(&data);
        Self {
            data,
            status,
            raw_transcript: raw_transcript.into(),
        }
    }
}
