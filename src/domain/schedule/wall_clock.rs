//! `HH:MM` wall-clock times.
//!
//! Times of day travel as zero-padded `HH:MM` strings, so lexicographic and
//! chronological order agree.

use chrono::NaiveTime;

use crate::domain::foundation::ValidationError;

const FORMAT: &str = "%H:%M";

/// Parses `HH:MM` (seconds, if present, are accepted and kept).
pub fn parse(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::invalid_format(field, format!("expected HH:MM, got '{}'", value)))
}

/// Formats as zero-padded `HH:MM`.
pub fn format(time: &NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

/// Serde adapter for `NaiveTime` as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse("time", &raw).map_err(de::Error::custom)
    }

    /// Same as the parent module, for optional fields.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.serialize_some(&super::super::format(t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => super::super::parse("time", &raw)
                    .map(Some)
                    .map_err(de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}
