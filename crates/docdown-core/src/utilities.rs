//! Helper functions for tag recognition and Markdown escaping.

/// Parse a heading tag name (`h1`, `h2`, ...) into its level.
///
/// Accepts `h` followed by any run of ASCII digits, so `</h3>` closes a
/// heading opened by `<h1>`; the tokenizer's permissiveness is preserved
/// here on purpose.
pub fn heading_level(tag: &str) -> Option<usize> {
    let digits = tag.strip_prefix('h')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// First-match scan of an attribute list, in document order.
pub fn attribute_value<'a>(attributes: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(key, _)| key.as_str() == name)
        .map(|(_, value)| value.as_str())
}

/// Escape Markdown-significant characters in text content.
///
/// The supported document shape only needs literal underscores protected;
/// structural punctuation is written by the handlers directly and never
/// passes through here.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if c == '_' {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
