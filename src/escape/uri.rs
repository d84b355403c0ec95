use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Everything except ASCII alphanumerics and the unreserved marks gets
// percent-encoded, matching the behavior of `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string for use inside a URI component.
///
/// Non-ASCII characters are encoded as their UTF-8 byte sequences.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Encodes an email address for a `mailto:` link.
///
/// Missing or blank-after-trim input yields an empty string.
pub fn encode_email_for_mailto(email: Option<&str>) -> String {
    encode_trimmed(email)
}

/// Encodes a phone number for a `tel:` link.
///
/// Missing or blank-after-trim input yields an empty string.
pub fn encode_phone_for_tel(phone: Option<&str>) -> String {
    encode_trimmed(phone)
}

fn encode_trimmed(value: Option<&str>) -> String {
    let trimmed = value.unwrap_or_default().trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        encode_uri_component(trimmed)
    }
}
