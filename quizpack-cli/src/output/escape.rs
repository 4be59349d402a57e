//! Markup escaping for messenger parse modes

/// Characters Telegram's Markdown parse mode treats specially
const MARKDOWN_SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escape text for HTML parse mode
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape text for the legacy Markdown parse mode
pub fn escape_markdown(text: &str) -> String {
    escape_with(text, |ch| MARKDOWN_SPECIAL.contains(&ch))
}

/// Escape text for MarkdownV2, where a literal backslash must be escaped too
pub fn escape_markdown_v2(text: &str) -> String {
    escape_with(text, |ch| ch == '\\' || MARKDOWN_SPECIAL.contains(&ch))
}

fn escape_with(text: &str, special: impl Fn(char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if special(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
