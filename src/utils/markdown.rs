//! MarkdownV2 escaping for outbound chat text.

/// Characters MarkdownV2 treats as markup.
///
/// `|` is intentionally absent: it carries spoiler formatting and must
/// survive escaping.
const SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '{', '}', '.', '!', '\\',
];

/// Escape every MarkdownV2-sensitive character in `text`.
///
/// # Examples
///
/// ```
/// use surveygraph::utils::markdown::escape_markdown_v2;
///
/// assert_eq!(escape_markdown_v2("a-b.c"), "a\\-b\\.c");
/// assert_eq!(escape_markdown_v2("plain"), "plain");
/// ```
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
