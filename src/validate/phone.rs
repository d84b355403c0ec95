/// Validates a contact phone number and returns the trimmed value.
///
/// Accepts digits, whitespace, `+`, `-`, `(` and `)` only, requires at
/// least one digit, and requires a trimmed length between 7 and 20
/// characters inclusive. Anything else, including missing input, is
/// rejected.
pub fn validate_phone_number(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'));
    if !allowed {
        return None;
    }
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let len = trimmed.chars().count();
    if !(7..=20).contains(&len) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Formats a Bulgarian phone number for display as `+359 PP MMM LLLL`.
///
/// Everything except digits and `+` is stripped first, then the result
/// must be exactly `+359` followed by nine digits. Any other input,
/// including numbers from other countries, yields an empty string.
///
/// # Example
/// ```
/// use nefara_web::validate::phone::parse_bg_phone_display;
///
/// assert_eq!(parse_bg_phone_display(Some("+359887383000")), "+359 88 738 3000");
/// assert_eq!(parse_bg_phone_display(Some("123456789")), "");
/// ```
pub fn parse_bg_phone_display(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let sanitized: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let Some(rest) = sanitized.strip_prefix("+359") else {
        return String::new();
    };
    if rest.len() != 9 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    format!("+359 {} {} {}", &rest[..2], &rest[2..5], &rest[5..])
}
