/// Validates an email address and returns the trimmed value when it matches.
///
/// The check is structural: one `@` with a non-empty local part, a domain
/// containing a dot with at least one character on each side, and no
/// whitespace anywhere. It is intentionally not a full RFC parser, so
/// unusual local parts (angle brackets, ampersands) pass as long as the
/// shape holds. Missing input is rejected.
///
/// # Example
/// ```
/// use nefara_web::validate::email::validate_email_address;
///
/// assert_eq!(
///     validate_email_address(Some(" user@example.com ")).as_deref(),
///     Some("user@example.com")
/// );
/// assert!(validate_email_address(Some("no-at-sign")).is_none());
/// assert!(validate_email_address(None).is_none());
/// ```
pub fn validate_email_address(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if is_email_shape(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

fn is_email_shape(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
