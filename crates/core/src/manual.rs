//! User manual field constraints and request validation.
//!
//! Candidate field sets arrive as raw JSON objects so the validator can tell
//! an absent key (no change) from an explicit `null` (clear the value) and
//! can report a non-integer `serial_number` as a field violation instead of a
//! body deserialization failure.
//!
//! `title` and `description` are trimmed before any check and stored
//! trimmed; a blank `description` is stored as `null`.

use serde_json::{Map, Value};
use validator::ValidateLength;

use crate::error::FieldErrors;
use crate::video_link;

/// Human-readable entity name; not-found responses read "{ENTITY_NAME} not found".
pub const ENTITY_NAME: &str = "User manual";

pub const MAX_TITLE_LENGTH: u64 = 1000;
pub const MAX_DESCRIPTION_LENGTH: u64 = 5000;

pub const FIELD_TITLE: &str = "title";
pub const FIELD_SERIAL_NUMBER: &str = "serial_number";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_VIDEO_LINK: &str = "video_link";
/// Legacy request key accepted in place of `video_link`.
pub const FIELD_VIDEO_LINK_ALIAS: &str = "youtube_link";

/// Whether a candidate field set creates a record or patches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Validated field values for a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManual {
    pub title: String,
    pub serial_number: Option<i64>,
    pub description: Option<String>,
    pub video_link: Option<String>,
}

/// Validated patch for an existing record.
///
/// The outer `Option` is `None` when the key was absent from the request
/// (leave the stored value alone). For nullable columns the inner `Option`
/// carries the new value, `None` meaning "set to null".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualChanges {
    pub title: Option<String>,
    pub serial_number: Option<Option<i64>>,
    pub description: Option<Option<String>>,
    pub video_link: Option<Option<String>>,
}

impl ManualChanges {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.serial_number.is_none()
            && self.description.is_none()
            && self.video_link.is_none()
    }

    /// Convert a create-mode result into a new record.
    ///
    /// Returns `None` if `title` is missing, which create-mode validation
    /// never lets through.
    pub fn into_new(self) -> Option<NewManual> {
        Some(NewManual {
            title: self.title?,
            serial_number: self.serial_number.flatten(),
            description: self.description.flatten(),
            video_link: self.video_link.flatten(),
        })
    }
}

/// Validate a candidate field set. Any violation fails the whole set.
pub fn validate_manual_fields(
    candidate: &Map<String, Value>,
    mode: ValidationMode,
) -> Result<ManualChanges, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut changes = ManualChanges::default();

    match (candidate.get(FIELD_TITLE), mode) {
        (None, ValidationMode::Update) => {}
        (None | Some(Value::Null), _) => errors.add(FIELD_TITLE, required(FIELD_TITLE)),
        (Some(Value::String(title)), _) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                errors.add(FIELD_TITLE, required(FIELD_TITLE));
            } else if !title.validate_length(None, Some(MAX_TITLE_LENGTH), None) {
                errors.add(FIELD_TITLE, too_long(FIELD_TITLE, MAX_TITLE_LENGTH));
            } else {
                changes.title = Some(title);
            }
        }
        (Some(_), _) => errors.add(FIELD_TITLE, not_a_string(FIELD_TITLE)),
    }

    if let Some(value) = candidate.get(FIELD_SERIAL_NUMBER) {
        match parse_serial_number(value) {
            Some(serial) => changes.serial_number = Some(serial),
            None => errors.add(
                FIELD_SERIAL_NUMBER,
                format!("The {} field must be an integer.", label(FIELD_SERIAL_NUMBER)),
            ),
        }
    }

    if let Some(value) = candidate.get(FIELD_DESCRIPTION) {
        match value {
            Value::Null => changes.description = Some(None),
            Value::String(description) => {
                let description = description.trim().to_string();
                if description.is_empty() {
                    changes.description = Some(None);
                } else if description.validate_length(None, Some(MAX_DESCRIPTION_LENGTH), None) {
                    changes.description = Some(Some(description));
                } else {
                    errors.add(
                        FIELD_DESCRIPTION,
                        too_long(FIELD_DESCRIPTION, MAX_DESCRIPTION_LENGTH),
                    );
                }
            }
            _ => errors.add(FIELD_DESCRIPTION, not_a_string(FIELD_DESCRIPTION)),
        }
    }

    if let Some((key, value)) = video_link_entry(candidate) {
        match value {
            Value::Null => changes.video_link = Some(None),
            Value::String(link) if video_link::accepts(link) => {
                changes.video_link = Some(Some(link.clone()));
            }
            Value::String(_) => {
                errors.add(key, format!("The {} field format is invalid.", label(key)));
            }
            _ => errors.add(key, not_a_string(key)),
        }
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

/// Validate a create request and produce the record to insert.
pub fn validate_new_manual(candidate: &Map<String, Value>) -> Result<NewManual, FieldErrors> {
    let changes = validate_manual_fields(candidate, ValidationMode::Create)?;
    changes.into_new().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.add(FIELD_TITLE, required(FIELD_TITLE));
        errors
    })
}

/// Accepts `null`, JSON integers, and strings holding a base-10 integer.
///
/// Returns `None` when the value is not an integer; `Some(None)` for `null`.
fn parse_serial_number(value: &Value) -> Option<Option<i64>> {
    match value {
        Value::Null => Some(None),
        Value::Number(n) => n.as_i64().map(Some),
        Value::String(s) => s.trim().parse::<i64>().ok().map(Some),
        _ => None,
    }
}

/// The video link entry, preferring `video_link` over the legacy alias.
fn video_link_entry(candidate: &Map<String, Value>) -> Option<(&'static str, &Value)> {
    candidate
        .get(FIELD_VIDEO_LINK)
        .map(|v| (FIELD_VIDEO_LINK, v))
        .or_else(|| {
            candidate
                .get(FIELD_VIDEO_LINK_ALIAS)
                .map(|v| (FIELD_VIDEO_LINK_ALIAS, v))
        })
}

fn label(field: &str) -> String {
    field.replace('_', " ")
}

fn required(field: &str) -> String {
    format!("The {} field is required.", label(field))
}

fn not_a_string(field: &str) -> String {
    format!("The {} field must be a string.", label(field))
}

fn too_long(field: &str, max: u64) -> String {
    format!(
        "The {} field must not be greater than {max} characters.",
        label(field)
    )
}
