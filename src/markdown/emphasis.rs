//! Bold and italic rewriting.
//!
//! Markdown uses the asterisk for both bold (`**text**`) and italic
//! (`*text*`), while Slack uses a single asterisk for bold and underscores
//! for italic. The scanner therefore resolves bold first and treats every
//! bold range as an opaque unit while looking for italic delimiters, so a
//! freshly produced `*bold*` can never be mistaken for source italic.
//!
//! Both passes work on byte offsets. Every delimiter is ASCII, so each offset
//! where a delimiter matches is also a char boundary. Resolved ranges come
//! out sorted and are walked with forward-only cursors, so a line is scanned
//! in time proportional to its length.

use std::borrow::Cow;
use std::ops::Range;

use super::links::{LinkMatch, find_links};
use super::span::{Span, render_line};

/// Delimiters for bold spans, tried in order at each position.
const BOLD_DELIMITERS: [&[u8]; 2] = [b"**", b"__"];

/// Delimiter for italic spans that need rewriting.
///
/// `_text_` is already Slack italic and is left alone.
const ITALIC_DELIMITER: u8 = b'*';

/// Scans a line into plain, bold and italic spans.
///
/// Bold: `**text**` or `__text__`, shortest match, at least one content
/// character. Bold content is kept verbatim.
///
/// Italic: `*text*` where neither delimiting asterisk touches another
/// asterisk. Italic spans may contain bold spans but never open or close
/// inside one.
///
/// Every character of the line is treated as text; use [`scan_inline`] to
/// resolve markdown links first.
///
/// # Arguments
///
/// * `line`: Line content without its line break
///
/// # Returns
///
/// Spans covering the whole line in order
pub fn scan_emphasis(line: &str) -> Vec<Span<'_>> {
    Scanner::new(line, Vec::new()).scan()
}

/// Scans a line into link and emphasis spans.
///
/// Links found by the link scanner are opaque units for both emphasis
/// passes: delimiters inside a url never pair, and emphasis may wrap a whole
/// link but never open or close inside one. Link text is scanned for
/// emphasis on its own.
///
/// # Arguments
///
/// * `line`: Line content without its line break
///
/// # Returns
///
/// Spans covering the whole line in order
pub fn scan_inline(line: &str) -> Vec<Span<'_>> {
    Scanner::new(line, find_links(line)).scan()
}

/// Rewrites bold and italic markup on a line to Slack form.
///
/// Lines without emphasis are returned borrowed.
pub fn rewrite_emphasis(line: &str) -> Cow<'_, str> {
    render_line(line, &scan_emphasis(line))
}

/// Rewrites links and emphasis on a line to Slack form.
pub fn rewrite_inline(line: &str) -> Cow<'_, str> {
    render_line(line, &scan_inline(line))
}

/// Forward-only cursor over sorted, non-overlapping ranges.
#[derive(Debug, Clone, Copy)]
struct Cursor<'r> {
    ranges: &'r [Range<usize>],
    next: usize,
}

impl<'r> Cursor<'r> {
    fn new(ranges: &'r [Range<usize>]) -> Self {
        Self { ranges, next: 0 }
    }

    fn peek(&self) -> Option<&'r Range<usize>> {
        self.ranges.get(self.next)
    }

    fn advance(&mut self) {
        self.next += 1;
    }

    /// Moves past ranges ending at or before `pos`.
    ///
    /// Returns the end of the range starting exactly at `pos`, if any.
    fn skip(&mut self, pos: usize) -> Option<usize> {
        while self.peek().is_some_and(|range| range.end <= pos) {
            self.advance();
        }

        self.peek()
            .filter(|range| range.start == pos)
            .map(|range| range.end)
    }

    /// Checks whether the range just passed ends at `pos`.
    fn ends_at(&self, pos: usize) -> bool {
        self.next
            .checked_sub(1)
            .and_then(|prev| self.ranges.get(prev))
            .is_some_and(|range| range.end == pos)
    }

    /// Checks whether the upcoming range starts at `pos`.
    fn starts_at(&self, pos: usize) -> bool {
        self.peek().is_some_and(|range| range.start == pos)
    }
}

/// One line being scanned, with the links resolved before emphasis.
struct Scanner<'a> {
    line: &'a str,
    bytes: &'a [u8],
    links: Vec<LinkMatch<'a>>,
    link_ranges: Vec<Range<usize>>,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str, links: Vec<LinkMatch<'a>>) -> Self {
        let link_ranges = links.iter().map(|link| link.range.clone()).collect();
        Self {
            line,
            bytes: line.as_bytes(),
            links,
            link_ranges,
        }
    }

    fn scan(&self) -> Vec<Span<'a>> {
        let bold = self.bold_ranges();
        let protected = outermost(&bold, &self.link_ranges);
        let italic = self.italic_ranges(&protected);

        let mut builder = SpanBuilder {
            scanner: self,
            bold: Cursor::new(&bold),
            next_link: 0,
        };
        let mut spans = Vec::new();
        let mut pos = 0;

        for range in &italic {
            builder.push_plain_and_bold(&mut spans, pos..range.start);

            let mut children = Vec::new();
            builder.push_plain_and_bold(&mut children, range.start + 1..range.end - 1);
            spans.push(Span::Italic(children));

            pos = range.end;
        }

        builder.push_plain_and_bold(&mut spans, pos..self.line.len());
        spans
    }

    /// Finds bold spans left to right; ranges include both delimiters.
    fn bold_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut links = Cursor::new(&self.link_ranges);
        // A delimiter with no close after some offset has none after any later one
        let mut exhausted = [false; BOLD_DELIMITERS.len()];
        let mut pos = 0;

        while pos < self.bytes.len() {
            if let Some(end) = links.skip(pos) {
                pos = end;
                continue;
            }

            let mut closed = None;
            for (delim, done) in BOLD_DELIMITERS.iter().zip(exhausted.iter_mut()) {
                if *done || !self.bytes[pos..].starts_with(delim) {
                    continue;
                }

                let mut ahead = links;
                match self.find_bold_close(pos + delim.len(), delim, &mut ahead) {
                    Some(close) => {
                        closed = Some((close + delim.len(), ahead));
                        break;
                    }
                    None => *done = true,
                }
            }

            match closed {
                Some((end, ahead)) => {
                    ranges.push(pos..end);
                    links = ahead;
                    pos = end;
                }
                None => pos += 1,
            }
        }

        ranges
    }

    /// Finds the first closing bold delimiter after at least one content byte.
    fn find_bold_close(
        &self,
        content_start: usize,
        delim: &[u8],
        links: &mut Cursor<'_>,
    ) -> Option<usize> {
        let mut pos = content_start;

        while pos < self.bytes.len() {
            if let Some(end) = links.skip(pos) {
                pos = end;
                continue;
            }
            if pos > content_start && self.bytes[pos..].starts_with(delim) {
                return Some(pos);
            }
            pos += 1;
        }

        None
    }

    /// Finds italic spans outside protected ranges; ranges include both
    /// delimiters.
    fn italic_ranges(&self, protected: &[Range<usize>]) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut cursor = Cursor::new(protected);
        let mut pos = 0;

        while pos < self.bytes.len() {
            if let Some(end) = cursor.skip(pos) {
                pos = end;
                continue;
            }

            if self.is_italic_delimiter(pos, &cursor) {
                let mut ahead = cursor;
                match self.find_italic_close(pos + 1, &mut ahead) {
                    Some(close) => {
                        ranges.push(pos..close + 1);
                        cursor = ahead;
                        pos = close + 1;
                        continue;
                    }
                    // No later opener can find a close either
                    None => break,
                }
            }

            pos += 1;
        }

        ranges
    }

    fn find_italic_close(&self, content_start: usize, protected: &mut Cursor<'_>) -> Option<usize> {
        let mut pos = content_start;

        while pos < self.bytes.len() {
            if let Some(end) = protected.skip(pos) {
                pos = end;
                continue;
            }
            if pos > content_start && self.is_italic_delimiter(pos, protected) {
                return Some(pos);
            }
            pos += 1;
        }

        None
    }

    /// Checks for a lone asterisk at `pos`.
    ///
    /// `protected` must already be skipped to `pos`. Asterisks belonging to
    /// bold ranges do not count as neighbours since the bold range is treated
    /// as a single opaque unit.
    fn is_italic_delimiter(&self, pos: usize, protected: &Cursor<'_>) -> bool {
        if self.bytes[pos] != ITALIC_DELIMITER {
            return false;
        }

        let before = pos > 0
            && self.bytes[pos - 1] == ITALIC_DELIMITER
            && !protected.ends_at(pos);
        let after = self.bytes.get(pos + 1) == Some(&ITALIC_DELIMITER)
            && !protected.starts_at(pos + 1);
        !before && !after
    }
}

/// Turns resolved ranges into spans, walking each range list once.
///
/// Ranges handed in must be increasing and must not split a bold range or a
/// link.
struct SpanBuilder<'s, 'a> {
    scanner: &'s Scanner<'a>,
    bold: Cursor<'s>,
    next_link: usize,
}

impl<'a> SpanBuilder<'_, 'a> {
    /// Appends plain, link and bold spans covering `range`.
    fn push_plain_and_bold(&mut self, spans: &mut Vec<Span<'a>>, range: Range<usize>) {
        let mut pos = range.start;

        while let Some(bold) = self.bold.peek()
            && bold.end <= range.end
        {
            self.bold.advance();
            self.push_text(spans, pos..bold.start);

            let mut children = Vec::new();
            self.push_text(&mut children, bold.start + 2..bold.end - 2);
            spans.push(Span::Bold(children));

            pos = bold.end;
        }

        self.push_text(spans, pos..range.end);
    }

    /// Appends plain and link spans covering `range`.
    fn push_text(&mut self, spans: &mut Vec<Span<'a>>, range: Range<usize>) {
        let scanner = self.scanner;
        let mut pos = range.start;

        while let Some(link) = scanner.links.get(self.next_link)
            && link.range.end <= range.end
        {
            self.next_link += 1;
            if pos < link.range.start {
                spans.push(Span::Plain(&scanner.line[pos..link.range.start]));
            }
            spans.push(Span::Link {
                url: link.url,
                text: scan_emphasis(link.text),
            });
            pos = link.range.end;
        }

        if pos < range.end {
            spans.push(Span::Plain(&scanner.line[pos..range.end]));
        }
    }
}

/// Merges two sorted range lists, dropping ranges nested in another.
fn outermost(a: &[Range<usize>], b: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        let next = if j == b.len() || (i < a.len() && a[i].start <= b[j].start) {
            i += 1;
            &a[i - 1]
        } else {
            j += 1;
            &b[j - 1]
        };

        if merged.last().is_some_and(|last| next.end <= last.end) {
            continue;
        }
        merged.push(next.clone());
    }

    merged
}
