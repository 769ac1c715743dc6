use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpnkn_onecomme::config::Config;
use jpnkn_onecomme::{format_payload, transform_value, ErrorKind};

fn main() -> Result<()> {
    // Initialize logging; stdout carries the converted payloads
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jpnkn_onecomme=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let options = config.transform_options();
    info!("Configuration loaded successfully");
    info!("  Service: {}", options.service_id);
    info!("  Prefix res no: {}", options.prefix_res_no);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        info!("Received: {}", format_payload(&line));

        let value: serde_json::Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!("Dropping message that is not JSON: {}", e);
                continue;
            }
        };

        match transform_value(&value, &options) {
            Ok(payload) => {
                serde_json::to_writer(&mut out, &payload)
                    .context("Failed to write OneComme payload")?;
                writeln!(out)?;
                out.flush()?;
                debug!("Forwarded comment {}", payload.comment.id);
            }
            Err(e) if e.kind() == ErrorKind::Validation => {
                warn!("Dropping message: {}", e);
            }
            Err(e) => return Err(e).context("Cannot transform with current configuration"),
        }
    }

    Ok(())
}
