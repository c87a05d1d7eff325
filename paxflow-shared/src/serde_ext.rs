//! Deserialization helpers for upstream payloads and query strings, where an
//! "unset" value frequently arrives as `""` or `" "` instead of being omitted.

use serde::de::IgnoredAny;
use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Text(String),
    Value(T),
    Other(IgnoredAny),
}

/// Deserialize an optional value, treating missing, `null`, empty and
/// whitespace-only strings as `None`.
///
/// Textual input is parsed through `FromStr`, so the same field accepts
/// `"statusCode": 3` from JSON and `statusCode=3` from a query string.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed.parse().map(Some).map_err(de::Error::custom)
            }
        }
        Some(Raw::Value(value)) => Ok(Some(value)),
        Some(Raw::Other(_)) => Err(de::Error::custom("expected a string or a plain value")),
    }
}

/// Like [`blank_as_none`], but anything that fails to parse also becomes `None`.
///
/// Used for optional search criteria, where a garbled filter should be
/// dropped rather than fail the whole request.
pub fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        Some(Raw::Value(value)) => Some(value),
        None | Some(Raw::Other(_)) => None,
    })
}

/// `Some` only when the string has at least one character.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "blank_as_none")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "blank_as_none")]
        code: Option<i32>,
    }

    #[test]
    fn test_blank_strings_become_none() {
        let probe: Probe = serde_json::from_str(r#"{ "at": " ", "code": "" }"#).unwrap();
        assert!(probe.at.is_none());
        assert!(probe.code.is_none());

        let probe: Probe = serde_json::from_str(r#"{ "at": null }"#).unwrap();
        assert!(probe.at.is_none());
        assert!(probe.code.is_none());
    }

    #[test]
    fn test_text_and_native_values_parse() {
        let probe: Probe =
            serde_json::from_str(r#"{ "at": "2024-01-01T10:00:00Z", "code": "3" }"#).unwrap();
        assert_eq!(probe.at, Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()));
        assert_eq!(probe.code, Some(3));

        let probe: Probe = serde_json::from_str(r#"{ "code": 5 }"#).unwrap();
        assert_eq!(probe.code, Some(5));
    }

    #[test]
    fn test_unparseable_upstream_text_is_an_error() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{ "code": "boarding" }"#);
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Criteria {
        #[serde(default, deserialize_with = "lenient_option")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "lenient_option")]
        code: Option<i32>,
    }

    #[test]
    fn test_lenient_drops_unparseable_criteria() {
        let criteria: Criteria =
            serde_json::from_str(r#"{ "at": "not-a-date", "code": "abc" }"#).unwrap();
        assert!(criteria.at.is_none());
        assert!(criteria.code.is_none());

        let criteria: Criteria = serde_json::from_str(r#"{ "at": {"nested": 1}, "code": [1] }"#).unwrap();
        assert!(criteria.at.is_none());
        assert!(criteria.code.is_none());
    }

    #[test]
    fn test_lenient_keeps_valid_criteria() {
        let criteria: Criteria =
            serde_json::from_str(r#"{ "at": " 2024-01-01T10:00:00Z ", "code": 4 }"#).unwrap();
        assert_eq!(criteria.at, Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()));
        assert_eq!(criteria.code, Some(4));

        let criteria: Criteria = serde_json::from_str(r#"{ "code": "" }"#).unwrap();
        assert!(criteria.code.is_none());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("E1".to_string())), Some("E1"));
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }
}
