//! Tolerant JSON decoding
//!
//! [`safe_json_parse`] decodes a possibly-absent, possibly-malformed JSON
//! string into a typed value, falling back to a caller-supplied default on
//! any kind of absence or decode failure. It never fails.

use serde::de::DeserializeOwned;

/// Decode a JSON string into a typed value, or fall back.
///
/// The fallback is returned when the input is `None`, empty, or fails to
/// decode as a value of the target type. A successful decode wins in every
/// other case.
///
/// # Examples
///
/// ```
/// use salvage::safe_json_parse;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Settings {
///     user_id: u64,
/// }
///
/// let fallback = Settings { user_id: 1 };
///
/// let decoded = safe_json_parse(Some(r#"{"user_id": 42}"#), Settings { user_id: 1 });
/// assert_eq!(decoded.user_id, 42);
///
/// let garbled = safe_json_parse(Some("not json"), fallback);
/// assert_eq!(garbled.user_id, 1);
/// ```
///
/// Absent and empty inputs fall back as well:
///
/// ```
/// use salvage::safe_json_parse;
///
/// assert_eq!(safe_json_parse::<Vec<i32>>(None, vec![7]), vec![7]);
/// assert_eq!(safe_json_parse::<Vec<i32>>(Some(""), vec![7]), vec![7]);
/// ```
pub fn safe_json_parse<T>(input: Option<&str>, fallback: T) -> T
where
    T: DeserializeOwned,
{
    match input {
        Some(text) if !text.is_empty() => serde_json::from_str(text).unwrap_or(fallback),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        valid: bool,
    }

    #[test]
    fn test_parses_valid_json() {
        let decoded = safe_json_parse(Some(r#"{"valid": true}"#), Payload { valid: false });
        assert_eq!(decoded, Payload { valid: true });
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let decoded = safe_json_parse(Some("not json"), Payload { valid: false });
        assert_eq!(decoded, Payload { valid: false });
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        // Valid JSON, wrong type for the target.
        let decoded = safe_json_parse(Some("[1, 2, 3]"), Payload { valid: false });
        assert_eq!(decoded, Payload { valid: false });
    }

    #[test]
    fn test_absent_input_falls_back() {
        let decoded: HashMap<String, i32> = safe_json_parse(None, HashMap::new());
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_empty_input_falls_back() {
        let decoded = safe_json_parse(Some(""), vec![1, 2]);
        assert_eq!(decoded, vec![1, 2]);
    }

    #[test]
    fn test_decodes_primitives() {
        assert_eq!(safe_json_parse(Some("41"), 0), 41);
        assert_eq!(
            safe_json_parse(Some(r#""hello""#), String::new()),
            "hello".to_string()
        );
    }
}
