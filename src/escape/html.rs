/// Escapes text for interpolation into an HTML document.
///
/// Replaces `&`, `<`, `>`, `"`, `'` and `/` with their HTML entities in a
/// single pass. The replacement strings reintroduce none of the mapped
/// characters, so the order of occurrences does not matter. Applied to
/// every untrusted string before it reaches a mail body.
///
/// # Example
/// ```
/// use nefara_web::escape::html::escape_html;
///
/// assert_eq!(
///     escape_html("<script>alert('x')</script>"),
///     "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
