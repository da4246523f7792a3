//! The shift draft being edited
//!
//! Three independent string fields, mutated one keystroke at a time.
//! `to_request` is the only exit: it either yields a fully-validated
//! `ShiftCreateRequest` or a `FormError`, so an unparseable datetime can
//! never reach the wire as a sentinel value.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

use crate::api::types::ShiftCreateRequest;

/// Transient form state, one field per input control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftForm {
    /// Local datetime text, "YYYY-MM-DDTHH:MM"
    pub start_time: String,
    /// Local datetime text, "YYYY-MM-DDTHH:MM"
    pub end_time: String,
    /// Free-text shift category
    pub shift_type: String,
}

/// Why a draft could not be turned into a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("{field} is not a valid date and time: {value:?}")]
    InvalidDateTime { field: &'static str, value: String },
}

impl ShiftForm {
    /// Validate the draft and build the creation request
    ///
    /// Every field must be non-empty and both datetimes must name real local
    /// instants. The type text is forwarded exactly as entered, untrimmed.
    pub fn to_request(&self) -> Result<ShiftCreateRequest, FormError> {
        if self.start_time.is_empty() {
            return Err(FormError::EmptyField("start time"));
        }
        if self.end_time.is_empty() {
            return Err(FormError::EmptyField("end time"));
        }
        if self.shift_type.is_empty() {
            return Err(FormError::EmptyField("type"));
        }

        let start_time = parse_datetime_local("start time", &self.start_time)?;
        let end_time = parse_datetime_local("end time", &self.end_time)?;

        Ok(ShiftCreateRequest {
            start_time,
            end_time,
            shift_type: self.shift_type.clone(),
        })
    }

    /// Reset all fields to empty
    pub fn clear(&mut self) {
        *self = ShiftForm::default();
    }
}

/// Parse one local-datetime editing value into an absolute UTC instant
///
/// Accepts "YYYY-MM-DDTHH:MM" (what a datetime-local control produces) and
/// the same with seconds. The wall-clock text is interpreted in the machine's
/// local timezone: a time skipped by a DST jump is rejected, an ambiguous one
/// resolves to the earlier instant.
fn parse_datetime_local(field: &'static str, value: &str) -> Result<DateTime<Utc>, FormError> {
    let invalid = || FormError::InvalidDateTime {
        field,
        value: value.to_string(),
    };

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| invalid())?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => Err(invalid()),
    }
}
