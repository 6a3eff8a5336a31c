//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Input path that selects standard input.
const STDIN_PATH: &str = "-";

/// Command line configuration for slackdown.
#[derive(Debug, Clone, Parser)]
#[command(name = "slackdown", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to convert (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Write result to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GitHub release JSON record; prints a webhook payload instead of converting input
    #[arg(long)]
    pub release: Option<PathBuf>,

    /// Client URL announced in the webhook payload
    #[arg(long)]
    pub client_url: Option<String>,

    /// Embed converted release notes in the webhook payload
    #[arg(long)]
    pub include_body: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input or release path does not exist, or if a
    /// release is given without a client URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path()
            && !input.exists()
        {
            bail!("Input file does not exist: {}", input.display());
        }

        if let Some(release) = &self.release {
            if !release.exists() {
                bail!("Release file does not exist: {}", release.display());
            }
            if self.client_url.is_none() {
                bail!("--client-url is required with --release");
            }
        }

        Ok(())
    }

    /// Returns input file path, or None when input comes from stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new(STDIN_PATH))
    }
}
