//! Field-level validation collected at submit time.
//!
//! Drafts stay editable through invalid intermediate states; rules only run
//! when a submit is attempted, and every failing field reports at once.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

/// Validation messages keyed by the wire-facing field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field, empty when the field passed
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Finish a validation pass: the payload when clean, the errors otherwise
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Require a non-empty string field
pub fn require_text(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(field, "Required");
    }
}

/// Require a numeric field to be at least `min`
pub fn require_min(errors: &mut FieldErrors, field: &'static str, value: f64, min: f64) {
    if !(value >= min) {
        errors.push(field, format!("Must be at least {min}"));
    }
}

/// Require a selection to have been made; passes the id through when present
pub fn require_selected(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<Uuid>,
) -> Option<Uuid> {
    if value.is_none() {
        errors.push(field, "Required");
    }
    value
}

/// Require a `#`-prefixed hex color code (3 or 6 digits)
pub fn require_hex_color(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let digits = value.strip_prefix('#');
    let valid = digits.is_some_and(|d| {
        (d.len() == 3 || d.len() == 6) && d.chars().all(|c| c.is_ascii_hexdigit())
    });
    if !valid {
        errors.push(field, "Must be a valid hex code");
    }
}
