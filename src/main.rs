use anyhow::{Context, Result};
use slackdown::{Config, Notification, Release};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter applied when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs stderr logging controlled by RUST_LOG.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Converts markdown from the configured file or stdin.
fn convert_input(config: &Config) -> Result<String> {
    match config.input_path() {
        Some(path) => slackdown::convert_file(path),
        None => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read markdown from stdin")?;
            Ok(slackdown::convert(&markdown))
        }
    }
}

/// Builds the webhook payload JSON for a saved release record.
fn render_payload(config: &Config, release_path: &Path) -> Result<String> {
    let release = Release::from_file(release_path)?;
    let client_url = config
        .client_url
        .as_deref()
        .context("--client-url is required with --release")?;

    info!(tag = %release.tag_name, "Rendering webhook payload");
    Notification::new(&release, client_url)
        .include_body(config.include_body)
        .to_json()
}

fn write_output(config: &Config, content: &str) -> Result<()> {
    match &config.output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let output = match &config.release {
        Some(release_path) => render_payload(&config, release_path)?,
        None => convert_input(&config)?,
    };

    write_output(&config, &output)
}
