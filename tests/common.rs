//! Shared test utilities for integration tests.
//!
//! Provides helper functions for writing markdown and release fixtures into
//! temporary directories used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Release notes in the shape GitHub returns them, exercising every stage.
pub const RELEASE_NOTES: &str = "# Version 2.0.0 Released!

## What's New

- Added **authentication** with [OAuth2](https://oauth.net/)
- Implemented __user profiles__ and settings
- Added support for *multiple languages*

## Bug Fixes

- Fixed critical _security vulnerability_
- Resolved [issue #123](https://github.com/example/repo/issues/123)

## Installation

```bash
pip install gh-release-downloader==2.0.0
```

> **Warning**: This version includes breaking changes.";

/// Expected Slack rendering of [`RELEASE_NOTES`].
pub const RELEASE_NOTES_SLACK: &str = "*VERSION 2.0.0 RELEASED!*

*What's New*

• Added *authentication* with <https://oauth.net/|OAuth2>
• Implemented *user profiles* and settings
• Added support for _multiple languages_

*Bug Fixes*

• Fixed critical _security vulnerability_
• Resolved <https://github.com/example/repo/issues/123|issue #123>

*Installation*

```bash
pip install gh-release-downloader==2.0.0
```

> *Warning*: This version includes breaking changes.";

/// Creates temporary directory for test fixtures.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file into directory, creating parent directories as needed.
///
/// # Returns
///
/// Full path of written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds GitHub release JSON with the fields a release API response carries.
///
/// # Arguments
///
/// * `tag`: Release tag name
/// * `body`: Release notes, or None for a release without notes
pub fn release_json(tag: &str, body: Option<&str>) -> String {
    serde_json::json!({
        "id": 42,
        "tag_name": tag,
        "name": tag,
        "html_url": format!("https://github.com/test/repo/releases/tag/{}", tag),
        "prerelease": false,
        "body": body,
        "assets": [
            { "name": "build.zip", "url": "https://api.github.com/repos/test/repo/releases/assets/1" }
        ]
    })
    .to_string()
}
