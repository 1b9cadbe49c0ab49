//! Response-shape probing.

use serde_json::Value;

/// Returns the first string found at any of `paths`, trimmed.
///
/// Paths are JSON Pointers tried in order. Providers have moved their text
/// field between API versions, so a miss on every path yields `""` rather
/// than an error.
///
/// # Examples
///
/// ```
/// use greeter_models::extract_text;
/// use serde_json::json;
///
/// let body = json!({ "result": "  Hi {name}!  " });
/// assert_eq!(extract_text(&body, &["/output/0/text", "/result"]), "Hi {name}!");
/// ```
pub fn extract_text(body: &Value, paths: &[&str]) -> String {
    paths
        .iter()
        .filter_map(|path| body.pointer(path))
        .find_map(|value| value.as_str().filter(|s| !s.is_empty()))
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
