use std::fmt::Write;

use serde::Deserialize;
use serde_json::Value;

use crate::payload::BodySegments;

/// Just the fields the display line needs. `no` is sometimes sent as a number.
#[derive(Debug, Deserialize)]
struct DisplayPayload {
    body: String,
    #[serde(default)]
    no: Option<Value>,
}

/// Render a raw jpnkn payload as `No.<no> <name> > <message>` for logs and UIs.
///
/// Never fails: if `raw` isn't a JSON object with a string `body`, it is
/// returned as-is.
pub fn format_payload(raw: &str) -> String {
    // Structs also decode from JSON arrays, so require an object first
    let payload = match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => match DisplayPayload::deserialize(value) {
            Ok(p) => p,
            Err(_) => return raw.to_string(),
        },
        _ => return raw.to_string(),
    };

    let segments = BodySegments::parse(&payload.body);
    let mut out = String::new();

    if let Some(no) = payload.no.as_ref().and_then(res_no_text) {
        let _ = write!(out, "No.{} ", no);
    }
    if !segments.name.is_empty() {
        let _ = write!(out, "{} > ", segments.name);
    }
    out.push_str(segments.message);
    out
}

fn res_no_text(no: &Value) -> Option<String> {
    match no {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        assert_eq!(
            format_payload(r#"{"body":"Bob<>x<>t<>hey","no":"3"}"#),
            "No.3 Bob > hey"
        );
    }

    #[test]
    fn test_invalid_json_returned_raw() {
        assert_eq!(format_payload("not valid json"), "not valid json");
        assert_eq!(format_payload(""), "");
        assert_eq!(format_payload("null"), "null");
        assert_eq!(format_payload("[1,2]"), "[1,2]");
    }

    #[test]
    fn test_missing_body_returned_raw() {
        let raw = r#"{"no":"3"}"#;
        assert_eq!(format_payload(raw), raw);

        let raw = r#"{"body":42,"no":"3"}"#;
        assert_eq!(format_payload(raw), raw);
    }

    #[test]
    fn test_array_returned_raw() {
        let raw = r#"["Bob<>x<>t<>hey","3"]"#;
        assert_eq!(format_payload(raw), raw);

        let raw = r#"["Bob<>x<>t<>hey"]"#;
        assert_eq!(format_payload(raw), raw);
    }

    #[test]
    fn test_optional_prefixes() {
        assert_eq!(format_payload(r#"{"body":"Bob<>x<>t<>hey"}"#), "Bob > hey");
        assert_eq!(format_payload(r#"{"body":"Bob<>x<>t<>hey","no":""}"#), "Bob > hey");
        assert_eq!(format_payload(r#"{"body":"<>x<>t<>hey","no":"9"}"#), "No.9 hey");
        assert_eq!(format_payload(r#"{"body":"","no":"9"}"#), "No.9 ");
    }

    #[test]
    fn test_numeric_no() {
        assert_eq!(
            format_payload(r#"{"body":"Bob<>x<>t<>hey","no":12}"#),
            "No.12 Bob > hey"
        );
        assert_eq!(format_payload(r#"{"body":"Bob<>x<>t<>hey","no":0}"#), "Bob > hey");
    }

    #[test]
    fn test_full_wire_payload() {
        let raw = r#"{"body":"名無し<>sage<>2024/01/01(月) 00:00:00<>おはよう<>","no":"100","bbsid":"news","threadkey":"1700000000"}"#;
        assert_eq!(format_payload(raw), "No.100 名無し > おはよう");
    }
}
