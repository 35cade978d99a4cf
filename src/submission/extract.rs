//! Fenced JSON block extraction

use serde_json::Value;
use tracing::debug;

/// Opening marker of the metadata block
pub const START_MARKER: &str = "```json";

/// Closing marker of the metadata block
pub const END_MARKER: &str = "```";

/// Extract app data from a PR description
///
/// Takes the first `` ```json `` block and the next `` ``` `` after it.
/// Returns `None` when either marker is missing, when the enclosed text is
/// not valid JSON, or when it parses to an empty value (`null`, `false`,
/// `0`, `""`, `[]`, `{}`). A malformed block and a missing block are not
/// distinguished.
pub fn extract_app_data(body: &str) -> Option<Value> {
    let start = body.find(START_MARKER)? + START_MARKER.len();
    let end = start + body[start..].find(END_MARKER)?;
    let block = body[start..end].trim();

    match serde_json::from_str::<Value>(block) {
        Ok(value) if is_empty(&value) => {
            debug!("JSON block is empty");
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            debug!("JSON block does not parse: {e}");
            None
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::MIN_POSITIVE),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_block() {
        let body = "Adding my app!\n\n```json\n{\"name\": \"Foo\"}\n```\n\nThanks";
        assert_eq!(extract_app_data(body), Some(json!({"name": "Foo"})));
    }

    #[test]
    fn test_extract_no_block() {
        assert_eq!(extract_app_data("Just a description"), None);
        assert_eq!(extract_app_data(""), None);
    }

    #[test]
    fn test_extract_untagged_block_is_ignored() {
        assert_eq!(extract_app_data("```\n{\"name\": \"Foo\"}\n```"), None);
    }

    #[test]
    fn test_extract_unterminated_block() {
        assert_eq!(extract_app_data("```json\n{\"name\": \"Foo\"}"), None);
    }

    #[test]
    fn test_extract_malformed_json() {
        assert_eq!(extract_app_data("```json\n{\"name\": \"Foo\",}\n```"), None);
    }

    #[test]
    fn test_extract_takes_first_block() {
        let body = "```json\n{\"a\": 1}\n```\n```json\n{\"b\": 2}\n```";
        assert_eq!(extract_app_data(body), Some(json!({"a": 1})));
    }

    #[test]
    fn test_extract_single_line_block() {
        assert_eq!(
            extract_app_data("```json {\"a\": true} ```"),
            Some(json!({"a": true}))
        );
    }

    #[test]
    fn test_extract_empty_values_are_absent() {
        for block in ["{}", "[]", "null", "\"\"", "0", "false", ""] {
            let body = format!("```json\n{block}\n```");
            assert_eq!(extract_app_data(&body), None, "block: {block}");
        }
    }

    #[test]
    fn test_extract_non_object_is_returned() {
        assert_eq!(extract_app_data("```json\n[1, 2]\n```"), Some(json!([1, 2])));
    }

    #[test]
    fn test_extract_preserves_key_order() {
        let value = extract_app_data("```json\n{\"z\": 1, \"a\": 2, \"m\": 3}\n```").unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
