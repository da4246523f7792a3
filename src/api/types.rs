//! Wire types exchanged with the shift service
//!
//! Timestamps travel as ISO-8601 UTC strings with millisecond precision
//! ("2024-01-01T09:00:00.000Z"), which is what the backend expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of a shift creation request
///
/// The `type` text is forwarded exactly as the user entered it;
/// the timestamps are absolute instants already converted to UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCreateRequest {
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub end_time: DateTime<Utc>,
    /// Free-text shift category ("Morning", "Night", ...)
    #[serde(rename = "type")]
    pub shift_type: String,
}

/// A shift as acknowledged by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: i64,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub end_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub shift_type: String,
}

/// ISO-8601 timestamp (de)serialization with millisecond precision
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept any RFC-3339 offset on the way in; normalize to UTC
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_wire_format() {
        let request = ShiftCreateRequest {
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(),
            shift_type: "Morning".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["start_time"], "2024-01-01T09:00:00.000Z");
        assert_eq!(json["end_time"], "2024-01-01T17:00:00.000Z");
        // The field is called "type" on the wire, not "shift_type"
        assert_eq!(json["type"], "Morning");
        assert!(json.get("shift_type").is_none());
    }

    #[test]
    fn test_record_accepts_server_precision() {
        // Servers commonly answer without fractional seconds
        let record: ShiftRecord = serde_json::from_str(
            r#"{"id":42,"start_time":"2024-01-01T09:00:00Z","end_time":"2024-01-01T17:00:00Z","type":"Morning"}"#,
        )
        .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.shift_type, "Morning");
        assert_eq!(
            record.start_time,
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_record_normalizes_offsets_to_utc() {
        let record: ShiftRecord = serde_json::from_str(
            r#"{"id":1,"start_time":"2024-01-01T10:00:00+01:00","end_time":"2024-01-01T18:00:00+01:00","type":"Late"}"#,
        )
        .unwrap();

        assert_eq!(
            record.start_time,
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_request_round_trip() {
        let request = ShiftCreateRequest {
            start_time: Utc.with_ymd_and_hms(2024, 6, 3, 22, 30, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 4, 6, 30, 0).unwrap(),
            shift_type: "Night".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        let restored: ShiftCreateRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request, restored);
    }
}
