//! Markdown to Slack mrkdwn conversion.
//!
//! This module rewrites GitHub flavored release notes line by line into the
//! markup Slack renders in messages: headings become emphasis, inline links
//! become `<url|text>`, bold and italic are remapped, list markers become
//! bullets, and fenced code is copied verbatim.

mod converter;
mod emphasis;
mod fence;
mod heading;
mod links;
mod list;
mod span;

pub use converter::{convert, convert_file, convert_opt, rewrite_line};
pub use emphasis::{rewrite_emphasis, rewrite_inline, scan_emphasis, scan_inline};
pub use fence::{Disposition, FenceState, is_fence_line};
pub use heading::{Heading, rewrite_heading};
pub use links::{rewrite_links, scan_links};
pub use list::{BULLET, rewrite_list_item};
pub use span::{Span, render};
