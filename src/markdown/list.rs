//! Bullet list marker rewriting.

use std::borrow::Cow;

/// Glyph Slack renders for unordered list items.
pub const BULLET: char = '•';

/// Rewrites a leading list marker to a bullet glyph.
///
/// Matches optional leading whitespace, one of `-`, `*` or `+`, then at least
/// one whitespace character. The marker and the whitespace after it become
/// `• `; the indentation and the rest of the line are kept as written.
/// Nesting depth is never computed, so indentation carries through literally.
///
/// # Arguments
///
/// * `line`: Line content without its line break
///
/// # Returns
///
/// Rewritten line, or the original line if it has no list marker
pub fn rewrite_list_item(line: &str) -> Cow<'_, str> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    let mut chars = body.chars();
    if !matches!(chars.next(), Some('-' | '*' | '+')) {
        return Cow::Borrowed(line);
    }

    let after_marker = chars.as_str();
    let content = after_marker.trim_start();
    if content.len() == after_marker.len() {
        return Cow::Borrowed(line);
    }

    Cow::Owned(format!("{}{} {}", indent, BULLET, content))
}
