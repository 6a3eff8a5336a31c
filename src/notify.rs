//! Release announcement payloads for Slack incoming webhooks.
//!
//! Builds the JSON body a webhook sender posts; delivery itself is left to
//! the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::markdown::convert;

/// GitHub release fields used for announcements.
///
/// Deserializes from the release objects returned by the GitHub REST API or
/// saved from it; fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
}

impl Release {
    /// Parses a release record from JSON.
    ///
    /// # Errors
    ///
    /// Returns error if JSON is malformed or lacks `tag_name` or `html_url`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse release JSON")
    }

    /// Reads a release record from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or does not hold a release record
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read release file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid release file: {}", path.display()))
    }

    /// Returns release notes when present and not blank.
    pub fn notes(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.trim().is_empty())
    }
}

/// JSON body accepted by Slack incoming webhooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub text: String,
}

/// Announcement of a deployed release.
///
/// Release notes are left out unless enabled with [`Notification::include_body`].
#[derive(Debug, Clone)]
pub struct Notification<'a> {
    release: &'a Release,
    client_url: &'a str,
    include_body: bool,
}

impl<'a> Notification<'a> {
    pub fn new(release: &'a Release, client_url: &'a str) -> Self {
        Self {
            release,
            client_url,
            include_body: false,
        }
    }

    /// Enables or disables embedding converted release notes.
    pub fn include_body(mut self, include: bool) -> Self {
        self.include_body = include;
        self
    }

    /// Composes the message text.
    ///
    /// Headline links the release tag to its page and names the client url;
    /// pre-releases are announced as such. With release notes enabled and
    /// present, the notes follow converted to Slack markup.
    pub fn text(&self) -> String {
        let kind = if self.release.prerelease {
            "pre-release"
        } else {
            "release"
        };
        let mut text = format!(
            ":rocket: New {} <{}|{}> deployed at {}",
            kind, self.release.html_url, self.release.tag_name, self.client_url
        );

        if self.include_body
            && let Some(notes) = self.release.notes()
        {
            text.push_str("\n\n*Release notes:*\n");
            text.push_str(&convert(notes));
        }

        text
    }

    pub fn payload(&self) -> WebhookPayload {
        WebhookPayload { text: self.text() }
    }

    /// Serializes the webhook payload.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.payload()).context("Failed to serialize webhook payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_release(body: Option<&str>) -> Release {
        Release {
            tag_name: "v1.0.0".to_string(),
            html_url: "https://github.com/test/repo/releases/tag/v1.0.0".to_string(),
            body: body.map(String::from),
            prerelease: false,
        }
    }

    #[test]
    fn test_text_without_body_by_default() {
        // Arrange
        let release = sample_release(Some("## What's New\n\n- Added **new feature**\n- Fixed bug"));

        // Act
        let text = Notification::new(&release, "https://example.com").text();

        // Assert
        assert_eq!(
            text,
            ":rocket: New release <https://github.com/test/repo/releases/tag/v1.0.0|v1.0.0> deployed at https://example.com"
        );
        assert!(!text.contains("Release notes:"));
        assert!(!text.contains("new feature"));
    }

    #[test]
    fn test_text_with_body_when_enabled() {
        // Arrange
        let release = sample_release(Some("## What's New\n\n- Added **new feature**\n- Fixed bug"));

        // Act
        let text = Notification::new(&release, "https://example.com")
            .include_body(true)
            .text();

        // Assert
        assert!(text.contains("v1.0.0"));
        assert!(text.contains("https://example.com"));
        assert!(text.ends_with(
            "\n\n*Release notes:*\n*What's New*\n\n• Added *new feature*\n• Fixed bug"
        ));
    }

    #[test]
    fn test_prerelease_headline() {
        // Arrange
        let release = Release {
            prerelease: true,
            ..sample_release(None)
        };

        // Act
        let text = Notification::new(&release, "https://example.com").text();

        // Assert
        assert_eq!(
            text,
            ":rocket: New pre-release <https://github.com/test/repo/releases/tag/v1.0.0|v1.0.0> deployed at https://example.com"
        );
    }

    #[test]
    fn test_text_with_body_explicitly_disabled() {
        // Arrange
        let release = sample_release(Some("- Fixed bug"));

        // Act
        let text = Notification::new(&release, "https://example.com")
            .include_body(false)
            .text();

        // Assert
        assert!(!text.contains("Release notes:"));
        assert!(!text.contains("Fixed bug"));
    }

    #[test]
    fn test_missing_or_blank_body_adds_nothing() {
        // Arrange
        let missing = sample_release(None);
        let blank = sample_release(Some("  \n "));

        // Act
        let missing_text = Notification::new(&missing, "https://example.com")
            .include_body(true)
            .text();
        let blank_text = Notification::new(&blank, "https://example.com")
            .include_body(true)
            .text();

        // Assert
        assert!(!missing_text.contains("Release notes:"));
        assert!(!blank_text.contains("Release notes:"));
        assert!(missing_text.contains("v1.0.0"));
    }

    #[test]
    fn test_release_from_github_json_ignores_extra_fields() {
        // Arrange
        let json = r#"{
            "id": 1,
            "tag_name": "v2.0.0-rc.1",
            "html_url": "https://github.com/o/r/releases/tag/v2.0.0-rc.1",
            "prerelease": true,
            "body": null,
            "assets": []
        }"#;

        // Act
        let release = Release::from_json(json).expect("Should parse release");

        // Assert
        assert_eq!(release.tag_name, "v2.0.0-rc.1");
        assert!(release.prerelease);
        assert_eq!(release.body, None);
    }

    #[test]
    fn test_release_missing_tag_is_error() {
        // Arrange
        let json = r#"{"html_url": "https://github.com/o/r"}"#;

        // Act
        let result = Release::from_json(json);

        // Assert
        assert!(result.is_err());
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("tag_name"), "Error should name field: {}", err_msg);
    }

    #[test]
    fn test_payload_json_has_text_field() {
        // Arrange
        let release = sample_release(None);

        // Act
        let json = Notification::new(&release, "https://example.com")
            .to_json()
            .expect("Should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Should be valid JSON");

        // Assert
        let text = value["text"].as_str().expect("text should be a string");
        assert!(text.starts_with(":rocket: New release <"));
    }
}
