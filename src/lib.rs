//! Converts GitHub release notes markdown into Slack mrkdwn.

mod config;
pub mod markdown;
mod notify;

pub use config::Config;
pub use markdown::{Span, convert, convert_file, convert_opt};
pub use notify::{Notification, Release, WebhookPayload};
