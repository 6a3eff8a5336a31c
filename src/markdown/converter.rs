//! Line-oriented markdown to Slack mrkdwn conversion.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::emphasis::rewrite_inline;
use super::fence::{Disposition, FenceState};
use super::heading::Heading;
use super::list::rewrite_list_item;

/// Converts GitHub flavored markdown to Slack mrkdwn.
///
/// Each line runs through a fixed pipeline: fence tracking, heading,
/// links, emphasis, list markers. Fenced code blocks (markers included) are
/// copied byte for byte. Blockquote markers and anything the stages do not
/// recognise pass through unchanged.
///
/// The output has the same number of lines as the input. Lines ending in
/// `\r\n` keep their carriage return. Malformed markdown never fails: an
/// unterminated fence simply keeps the rest of the document verbatim.
///
/// Conversion is not idempotent; converting already converted text may
/// change it again (a Slack `*bold*` reads as markdown italic).
///
/// # Arguments
///
/// * `markdown`: Markdown document
///
/// # Returns
///
/// Slack formatted document
///
/// # Examples
///
/// ```
/// let slack = slackdown::convert("## What's New\n\n- Added **auth**");
/// assert_eq!(slack, "*What's New*\n\n• Added *auth*");
/// ```
pub fn convert(markdown: &str) -> String {
    let mut state = FenceState::default();
    let mut out = String::with_capacity(markdown.len());

    for (index, raw) in markdown.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let (line, line_end) = match raw.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (raw, ""),
        };

        let (next, disposition) = state.advance(line);
        state = next;

        match disposition {
            Disposition::Verbatim => out.push_str(line),
            Disposition::Rewrite => out.push_str(&rewrite_line(line)),
        }
        out.push_str(line_end);
    }

    if state.is_inside() {
        debug!("Document ends inside an unterminated code fence");
    }

    out
}

/// Converts markdown that may be absent.
///
/// Absent input stays absent; present input is converted with [`convert`].
pub fn convert_opt(markdown: Option<&str>) -> Option<String> {
    markdown.map(convert)
}

/// Converts markdown file at given path.
///
/// # Errors
///
/// Returns error if file cannot be read as UTF8 text
pub fn convert_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;

    debug!(path = %path.display(), bytes = content.len(), "Converting markdown file");
    Ok(convert(&content))
}

/// Rewrites a single line outside fenced code.
///
/// Heading lines have their text rewritten for links and emphasis and are
/// then wrapped in the heading emphasis, so the wrapper itself is never read
/// as markup; they never receive a bullet. Other lines go through links,
/// emphasis and list markers in that order.
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
    if let Some(heading) = Heading::parse(line) {
        trace!(level = heading.level(), "Rewriting heading");
        let text = heading.text();
        let body = rewrite_inline(&text);
        return Cow::Owned(heading.wrap(&body));
    }

    match rewrite_inline(line) {
        Cow::Borrowed(line) => rewrite_list_item(line),
        Cow::Owned(line) => Cow::Owned(rewrite_list_item(&line).into_owned()),
    }
}
