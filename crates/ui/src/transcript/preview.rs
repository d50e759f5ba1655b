//! Preview strings for tool payloads.
//!
//! Arguments and response data arrive as serialized text that usually, but
//! not always, parses as JSON. Nothing in here propagates a parse failure:
//! malformed payloads degrade to a truncated raw preview.

use serde_json::Value;

/// Cap for the argument preview on a tool-call summary line
pub const ARG_PREVIEW_MAX: usize = 50;
/// Cap for the collapsed tool-response preview
pub const RESPONSE_PREVIEW_MAX: usize = 100;

/// Short preview of a tool call's arguments
///
/// When the arguments parse as a JSON object, the preview is the first two
/// key names in document order, with a trailing ellipsis when more keys
/// exist. Anything else falls back to the raw string, capped.
pub fn tool_call_preview(arguments: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(arguments)
        && !map.is_empty()
    {
        let mut preview = map.keys().take(2).cloned().collect::<Vec<_>>().join(", ");
        if map.len() > 2 {
            preview.push_str("...");
        }
        return preview;
    }

    truncate_chars(arguments, ARG_PREVIEW_MAX)
}

/// Collapsed one-line preview of a tool response payload
///
/// Well-formed payloads are re-serialized compactly so whitespace in the
/// transport encoding does not bloat the line; malformed ones show raw.
/// Either way the preview is capped.
pub fn tool_response_preview(data: &str) -> String {
    match serde_json::from_str::<Value>(data) {
        Ok(value) => truncate_chars(&value.to_string(), RESPONSE_PREVIEW_MAX),
        Err(_) => truncate_chars(data, RESPONSE_PREVIEW_MAX),
    }
}

/// Pretty-printed form of a structured payload, when it parses
pub fn pretty_response(data: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(data).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// First `max` characters, with an ellipsis when anything was cut
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_preview_first_two_keys() {
        assert_eq!(tool_call_preview(r#"{"a":1,"b":2,"c":3}"#), "a, b...");
        assert_eq!(tool_call_preview(r#"{"x":1}"#), "x");
        assert_eq!(tool_call_preview(r#"{"x":1,"y":2}"#), "x, y");
    }

    #[test]
    fn test_argument_preview_document_order() {
        assert_eq!(tool_call_preview(r#"{"zebra":1,"apple":2,"mango":3}"#), "zebra, apple...");
    }

    #[test]
    fn test_argument_preview_raw_fallback() {
        assert_eq!(tool_call_preview("not json at all"), "not json at all");

        let long = "y".repeat(60);
        let preview = tool_call_preview(&long);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_argument_preview_non_object_json() {
        // parses, but has no keys to show
        assert_eq!(tool_call_preview("[1,2,3]"), "[1,2,3]");
        assert_eq!(tool_call_preview("{}"), "{}");
        assert_eq!(tool_call_preview("42"), "42");
    }

    #[test]
    fn test_response_preview_compacts_json() {
        assert_eq!(tool_response_preview(r#"{"ok":true}"#), r#"{"ok":true}"#);
        assert_eq!(tool_response_preview("{ \"ok\" :  true }"), r#"{"ok":true}"#);
    }

    #[test]
    fn test_response_preview_caps_at_100() {
        let data = format!(r#"{{"blob":"{}"}}"#, "z".repeat(200));
        let preview = tool_response_preview(&data);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_response_preview_raw_fallback() {
        assert_eq!(tool_response_preview("not json"), "not json");

        let raw = "w".repeat(150);
        let preview = tool_response_preview(&raw);
        assert_eq!(preview.chars().count(), 103);
    }

    #[test]
    fn test_pretty_response() {
        let pretty = pretty_response(r#"{"ok":true}"#).unwrap();
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"ok\": true"));

        assert_eq!(pretty_response("not json"), None);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "é".repeat(60);
        let preview = truncate_chars(&s, 50);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.starts_with("é"));
    }
}
