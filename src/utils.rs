/// Utility functions
use reqwest::Url;

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a URL for logging with any `api_key` value masked.
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "api_key") {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Parse an optional query value, falling back when absent or malformed.
pub fn int_or(value: Option<&String>, default: i64) -> i64 {
    value
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}
