//! Inline link rewriting.

use std::borrow::Cow;
use std::ops::Range;

use super::span::{Span, render_line};

/// Inline markdown link located in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LinkMatch<'a> {
    /// Byte range from `[` through `)`.
    pub(super) range: Range<usize>,
    pub(super) text: &'a str,
    pub(super) url: &'a str,
}

/// Outcome of trying to match a link at one `[`.
enum Attempt<'a> {
    Matched(LinkMatch<'a>),
    /// No link opens before this offset.
    ResumeAt(usize),
    /// No link opens anywhere after the `[`.
    Exhausted,
}

/// Finds inline links left to right, without overlap.
pub(super) fn find_links(line: &str) -> Vec<LinkMatch<'_>> {
    let mut links = Vec::new();
    let mut search_pos = 0;

    while let Some(open) = line[search_pos..].find('[') {
        let open = search_pos + open;

        match match_link(line, open) {
            Attempt::Matched(link) => {
                search_pos = link.range.end;
                links.push(link);
            }
            Attempt::ResumeAt(pos) => search_pos = pos,
            Attempt::Exhausted => break,
        }
    }

    links
}

/// Scans a line for inline markdown links.
///
/// Recognises `[text](url)` where text and url are both non-empty. The first
/// `]` ends the text and the first `)` ends the url, so nested brackets and
/// parentheses inside a url are not supported. Matches never overlap and are
/// found left to right.
///
/// # Arguments
///
/// * `line`: Line content without its line break
///
/// # Returns
///
/// Plain and link spans covering the whole line in order
pub fn scan_links(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for link in find_links(line) {
        if last_end < link.range.start {
            spans.push(Span::Plain(&line[last_end..link.range.start]));
        }
        spans.push(Span::link(link.url, link.text));
        last_end = link.range.end;
    }

    if last_end < line.len() {
        spans.push(Span::Plain(&line[last_end..]));
    }

    spans
}

/// Rewrites every inline link on a line to Slack `<url|text>` form.
///
/// Lines without links are returned borrowed.
pub fn rewrite_links(line: &str) -> Cow<'_, str> {
    render_line(line, &scan_links(line))
}

/// Attempts to match a link whose `[` is at `open`.
fn match_link(line: &str, open: usize) -> Attempt<'_> {
    let text_start = open + 1;
    let Some(text_len) = line[text_start..].find(']') else {
        return Attempt::Exhausted;
    };
    let text_end = text_start + text_len;

    // Any `[` up to here ends its text at the same `]` and fails the same way
    let retry = Attempt::ResumeAt(text_end + 1);
    if text_end == text_start {
        return retry;
    }

    let url_start = text_end + 1;
    if !line[url_start..].starts_with('(') {
        return retry;
    }
    let url_start = url_start + 1;

    let Some(url_len) = line[url_start..].find(')') else {
        return Attempt::Exhausted;
    };
    let url_end = url_start + url_len;
    if url_end == url_start {
        return retry;
    }

    Attempt::Matched(LinkMatch {
        range: open..url_end + 1,
        text: &line[text_start..text_end],
        url: &line[url_start..url_end],
    })
}
