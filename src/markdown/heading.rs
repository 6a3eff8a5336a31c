//! ATX heading detection and emphasis mapping.

use std::borrow::Cow;

use super::span::Span;

/// Deepest heading level recognised.
const MAX_LEVEL: usize = 6;

/// Heading line split into level and text.
///
/// Slack has no heading markup, so headings become emphasis: level 1 is
/// upper-cased bold, level 2 is bold, deeper levels are italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    level: usize,
    text: &'a str,
}

impl<'a> Heading<'a> {
    /// Parses a heading line.
    ///
    /// The whole line must be 1 to 6 `#` characters, at least one whitespace
    /// character and non-empty text. Lines with leading whitespace, more than
    /// six hashes, or no space after the hashes (`#tag`) are not headings.
    ///
    /// # Arguments
    ///
    /// * `line`: Line content without its line break
    ///
    /// # Returns
    ///
    /// Parsed heading, or None if line is not a heading
    pub fn parse(line: &'a str) -> Option<Self> {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if level == 0 || level > MAX_LEVEL {
            return None;
        }

        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let text = rest.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self { level, text })
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns heading text as it enters the inline stages.
    ///
    /// Level 1 text is upper-cased; other levels are returned as written.
    pub fn text(&self) -> Cow<'a, str> {
        if self.level == 1 {
            Cow::Owned(self.text.to_uppercase())
        } else {
            Cow::Borrowed(self.text)
        }
    }

    /// Wraps already rewritten heading text in the emphasis for its level.
    pub fn wrap(&self, body: &str) -> String {
        let span = if self.level <= 2 {
            Span::bold(body)
        } else {
            Span::italic(body)
        };
        span.to_string()
    }
}

/// Rewrites a heading line into Slack emphasis.
///
/// Applies only the heading stage: inline markup in the heading text is left
/// as written. Non-heading lines are returned unchanged.
pub fn rewrite_heading(line: &str) -> Cow<'_, str> {
    match Heading::parse(line) {
        Some(heading) => Cow::Owned(heading.wrap(&heading.text())),
        None => Cow::Borrowed(line),
    }
}
