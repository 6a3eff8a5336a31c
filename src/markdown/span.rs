//! Typed inline spans and their Slack mrkdwn rendering.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Contiguous run of a line tagged with one styling kind.
///
/// Spans borrow their text from the line they were scanned from. Emphasis
/// spans hold child spans so italic text can contain bold text. Rendering
/// through `Display` produces the Slack form: bold as `*text*`, italic as
/// `_text_`, links as `<url|text>`, plain text unchanged. Link text is itself
/// a span sequence so emphasis inside a label survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Bold(Vec<Span<'a>>),
    Italic(Vec<Span<'a>>),
    Link { url: &'a str, text: Vec<Span<'a>> },
}

impl<'a> Span<'a> {
    /// Bold span wrapping a single run of plain text.
    pub fn bold(text: &'a str) -> Self {
        Span::Bold(vec![Span::Plain(text)])
    }

    /// Italic span wrapping a single run of plain text.
    pub fn italic(text: &'a str) -> Self {
        Span::Italic(vec![Span::Plain(text)])
    }

    /// Link with a plain text label.
    pub fn link(url: &'a str, text: &'a str) -> Self {
        Span::Link {
            url,
            text: vec![Span::Plain(text)],
        }
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Span::Plain(text) => f.write_str(text),
            Span::Bold(children) => {
                f.write_char('*')?;
                children.iter().try_for_each(|child| write!(f, "{}", child))?;
                f.write_char('*')
            }
            Span::Italic(children) => {
                f.write_char('_')?;
                children.iter().try_for_each(|child| write!(f, "{}", child))?;
                f.write_char('_')
            }
            Span::Link { url, text } => {
                write!(f, "<{}|", url)?;
                text.iter().try_for_each(|child| write!(f, "{}", child))?;
                f.write_char('>')
            }
        }
    }
}

/// Renders a span sequence to a single string.
pub fn render(spans: &[Span<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        // Writing into a String cannot fail
        let _ = write!(out, "{}", span);
    }
    out
}

/// Renders the spans scanned from `line`, borrowing when nothing changed.
pub(super) fn render_line<'a>(line: &'a str, spans: &[Span<'a>]) -> Cow<'a, str> {
    match spans {
        [] | [Span::Plain(_)] => Cow::Borrowed(line),
        _ => Cow::Owned(render(spans)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_kind() {
        // Arrange
        let spans = [
            Span::Plain("a "),
            Span::bold("b"),
            Span::Plain(" "),
            Span::italic("c"),
            Span::Plain(" "),
            Span::link("https://example.com", "d"),
        ];

        // Act
        let result = render(&spans);

        // Assert
        assert_eq!(result, "a *b* _c_ <https://example.com|d>");
    }

    #[test]
    fn test_render_nested_emphasis() {
        // Arrange
        let span = Span::Italic(vec![
            Span::Plain("see "),
            Span::bold("this"),
            Span::Plain(" now"),
        ]);

        // Act
        let result = span.to_string();

        // Assert
        assert_eq!(result, "_see *this* now_");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_link_with_emphasis_in_label() {
        // Arrange
        let span = Span::Link {
            url: "https://example.com",
            text: vec![Span::Plain("read "), Span::bold("docs")],
        };

        // Act
        let result = span.to_string();

        // Assert
        assert_eq!(result, "<https://example.com|read *docs*>");
    }

    #[test]
    fn test_render_line_borrows_plain_text() {
        // Arrange
        let line = "nothing to do";

        // Act
        let result = render_line(line, &[Span::Plain(line)]);

        // Assert
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}
