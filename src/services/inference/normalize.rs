//! Normalization of the provider's free-form reply
//!
//! The model is asked for a bare JSON object but sometimes wraps it in a Markdown code
//! fence, omits keys or returns the wrong types. Fences are stripped and every field is
//! coerced or defaulted so callers always get a schema-valid `AnalysisResult`. Only a
//! reply that is not JSON at all (or not an object) is rejected.
use serde_json::{Map, Value};

use crate::{error::AdapterError, models::AnalysisResult};

pub const MAX_PALETTE: usize = 6;
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Marker used when the provider leaves out a descriptive field
pub const UNKNOWN: &str = "unknown";

pub const FALLBACK_PALETTE: [&str; 3] = ["#F5A9B8", "#A9D0F5", "#F2F5A9"];

pub const FALLBACK_RECOMMENDATIONS: [&str; 2] = [
    "Garments that gently define the waist",
    "Avoid cuts that break the line at the widest areas of the body",
];

/// Removes a surrounding Markdown code fence and an optional `json` language tag.
pub fn strip_code_fences(raw: &str) -> &str {
    let content = raw.trim();
    if !content.starts_with("```") {
        return content;
    }

    let content = content.trim_matches('`');
    match content.split_once('\n') {
        Some((first_line, rest)) if first_line.trim().to_lowercase().starts_with("json") => rest,
        _ => content,
    }
}

/// Parses the raw provider reply into an `AnalysisResult`.
pub fn normalize_reply(raw: &str) -> Result<AnalysisResult, AdapterError> {
    let raw = if raw.is_empty() { "{}" } else { raw };
    let content = strip_code_fences(raw);

    let value: Value = serde_json::from_str(content).map_err(|source| AdapterError::InvalidJson {
        source,
        raw: raw.to_string(),
    })?;

    let Value::Object(fields) = value else {
        return Err(AdapterError::NotAnObject(raw.to_string()));
    };

    let mut color_palette = string_list(&fields, "color_palette");
    color_palette.truncate(MAX_PALETTE);
    if color_palette.is_empty() {
        color_palette = FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect();
    }

    let mut recommendations = string_list(&fields, "recommendations");
    recommendations.truncate(MAX_RECOMMENDATIONS);
    if recommendations.is_empty() {
        recommendations = FALLBACK_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect();
    }

    Ok(AnalysisResult {
        body_type: descriptive(&fields, "body_type"),
        face_shape: descriptive(&fields, "face_shape"),
        color_palette,
        recommendations,
    })
}

/// String form of any JSON value; strings are taken without quotes
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn descriptive(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(value) => coerce(value),
    }
}

fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(coerce)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fallback_palette() -> Vec<String> {
        FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    fn fallback_recommendations() -> Vec<String> {
        FALLBACK_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_strip_plain_json_untouched() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_uppercase_language_tag() {
        let raw = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_without_language_tag() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_reply_matches_unwrapped() {
        let body = json!({
            "body_type": "athletic",
            "face_shape": "oval",
            "color_palette": ["#000080", "#808080", "#FFFFFF"],
            "recommendations": ["Navy unstructured blazer with white Oxford shirt"]
        })
        .to_string();
        let fenced = format!("```json\n{}\n```", body);

        assert_eq!(
            normalize_reply(&fenced).unwrap(),
            normalize_reply(&body).unwrap()
        );
    }

    #[test]
    fn test_well_formed_reply_is_kept() {
        let raw = json!({
            "body_type": "hourglass",
            "face_shape": "heart",
            "color_palette": ["#111111", "#222222", "#333333"],
            "recommendations": ["Wrap dress in #111111", "Ankle boots"]
        })
        .to_string();

        let result = normalize_reply(&raw).unwrap();
        assert_eq!(result.body_type, "hourglass");
        assert_eq!(result.face_shape, "heart");
        assert_eq!(result.color_palette, vec!["#111111", "#222222", "#333333"]);
        assert_eq!(result.recommendations, vec!["Wrap dress in #111111", "Ankle boots"]);
    }

    #[test]
    fn test_two_colors_and_no_recommendations_uses_fallback_list() {
        let raw = json!({
            "body_type": "rectangle",
            "face_shape": "oval",
            "color_palette": ["#111111", "#222222"],
            "recommendations": []
        })
        .to_string();

        let result = normalize_reply(&raw).unwrap();
        assert_eq!(result.color_palette, vec!["#111111", "#222222"]);
        assert_eq!(result.recommendations, fallback_recommendations());
    }

    #[test]
    fn test_empty_reply_is_all_defaults() {
        let result = normalize_reply("").unwrap();
        assert_eq!(result.body_type, UNKNOWN);
        assert_eq!(result.face_shape, UNKNOWN);
        assert_eq!(result.color_palette, fallback_palette());
        assert_eq!(result.recommendations, fallback_recommendations());
    }

    #[test]
    fn test_whitespace_only_reply_is_a_hard_error() {
        let result = normalize_reply("  \n ");
        assert!(matches!(result, Err(AdapterError::InvalidJson { .. })));
    }

    #[test]
    fn test_null_fields_are_treated_as_missing() {
        let raw = r#"{"body_type": null, "color_palette": null, "recommendations": null}"#;
        let result = normalize_reply(raw).unwrap();
        assert_eq!(result.body_type, UNKNOWN);
        assert_eq!(result.color_palette, fallback_palette());
        assert_eq!(result.recommendations, fallback_recommendations());
    }

    #[test]
    fn test_truncation_limits() {
        let palette: Vec<String> = (0..10).map(|i| format!("#00000{}", i)).collect();
        let recommendations: Vec<String> = (0..20).map(|i| format!("item {}", i)).collect();
        let raw = json!({
            "body_type": "athletic",
            "face_shape": "round",
            "color_palette": palette,
            "recommendations": recommendations
        })
        .to_string();

        let result = normalize_reply(&raw).unwrap();
        assert_eq!(result.color_palette.len(), MAX_PALETTE);
        assert_eq!(result.color_palette[5], "#000005");
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.recommendations[9], "item 9");
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let raw = json!({
            "body_type": 42,
            "face_shape": true,
            "color_palette": ["#ABCDEF", 123, null],
            "recommendations": [{"top": "shirt"}]
        })
        .to_string();

        let result = normalize_reply(&raw).unwrap();
        assert_eq!(result.body_type, "42");
        assert_eq!(result.face_shape, "true");
        assert_eq!(result.color_palette, vec!["#ABCDEF", "123"]);
        assert_eq!(result.recommendations, vec![r#"{"top":"shirt"}"#]);
    }

    #[test]
    fn test_single_string_where_list_expected() {
        let raw = r#"{"recommendations": "Camel wool coat", "color_palette": 7}"#;
        let result = normalize_reply(raw).unwrap();
        assert_eq!(result.recommendations, vec!["Camel wool coat"]);
        assert_eq!(result.color_palette, fallback_palette());
    }

    #[test]
    fn test_invalid_json_is_a_hard_error() {
        let result = normalize_reply("```json\nbody_type: athletic\n```");
        assert!(matches!(result, Err(AdapterError::InvalidJson { .. })));
    }

    #[test]
    fn test_prose_reply_is_a_hard_error() {
        let result = normalize_reply("Sorry, I cannot analyse this photo.");
        assert!(matches!(result, Err(AdapterError::InvalidJson { .. })));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        let result = normalize_reply(r##"["#FFFFFF"]"##);
        assert!(matches!(result, Err(AdapterError::NotAnObject(_))));
    }
}
