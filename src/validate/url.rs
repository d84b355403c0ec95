use url::Url;

/// Fallback returned whenever the configured client URL is unusable.
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";

/// Validates the configured client URL, substituting a safe default.
///
/// The value must carry an `http://` or `https://` scheme (checked both by
/// a case-insensitive prefix test and a strict parse) to be returned
/// as-is, trimmed. Everything else, including missing input, yields
/// [`DEFAULT_CLIENT_URL`]. This function never signals an error.
///
/// # Example
/// ```
/// use nefara_web::validate::url::{validate_client_url, DEFAULT_CLIENT_URL};
///
/// assert_eq!(validate_client_url(Some("https://nefara.com ")), "https://nefara.com");
/// assert_eq!(validate_client_url(Some("not a url")), DEFAULT_CLIENT_URL);
/// assert_eq!(validate_client_url(None), DEFAULT_CLIENT_URL);
/// ```
pub fn validate_client_url(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_CLIENT_URL.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || !has_http_scheme(trimmed) {
        return DEFAULT_CLIENT_URL.to_string();
    }
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => trimmed.to_string(),
        _ => DEFAULT_CLIENT_URL.to_string(),
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}
