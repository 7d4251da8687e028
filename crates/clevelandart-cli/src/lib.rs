// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared plumbing for the command-line entry points.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clevelandart::blocking::ClevelandArtClient;
use clevelandart::{Artwork, ArtworkId};
use clevelandart_config::AppConfig;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Accession number printed by `featured-artwork`.
pub const FEATURED_ACCESSION: &str = "1952.233";

/// Load config (optionally from the TOML file named by `CLEVELANDART_CONFIG`),
/// install tracing and build a blocking client.
pub fn bootstrap() -> Result<ClevelandArtClient> {
    let config_path = std::env::var_os("CLEVELANDART_CONFIG").map(PathBuf::from);
    let config = clevelandart_config::load(config_path.as_deref())?;
    init_tracing(&config.telemetry.log_level);
    client_from_config(&config)
}

pub fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

pub fn client_from_config(config: &AppConfig) -> Result<ClevelandArtClient> {
    let mut builder = ClevelandArtClient::builder().base_url(&config.api.base_url);
    if let Some(timeout) = config.api.timeout() {
        builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = &config.api.user_agent {
        builder = builder.user_agent(user_agent);
    }
    debug!(target: "cli", base_url = %config.api.base_url, "building client");
    builder.build_blocking().context("failed to build API client")
}

/// The single positional identifier of `artwork`.
pub fn parse_identifier<I>(args: I) -> Result<ArtworkId>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(raw) = args.next() else {
        bail!("usage: artwork <id | accession-number>");
    };
    if args.next().is_some() {
        bail!("usage: artwork <id | accession-number>");
    }
    let id: ArtworkId = raw.parse()?;
    if id.to_string().is_empty() {
        bail!("identifier must not be empty");
    }
    Ok(id)
}

/// Whether `random-artwork` was asked for records with images only.
pub fn parse_with_image_flag<I>(args: I) -> Result<bool>
where
    I: IntoIterator<Item = String>,
{
    let mut with_image = false;
    for arg in args {
        match arg.as_str() {
            "--with-image" => with_image = true,
            other => bail!("unexpected argument '{other}'\nusage: random-artwork [--with-image]"),
        }
    }
    Ok(with_image)
}

/// Description and web image URL, one per line; a line is empty when the value is missing.
pub fn render_featured(artwork: &Artwork) -> String {
    format!(
        "{}\n{}",
        artwork.description.as_deref().unwrap_or_default(),
        artwork.web_image_url().unwrap_or_default()
    )
}

pub fn render_json(artwork: &Artwork) -> Result<String> {
    serde_json::to_string_pretty(artwork).context("failed to render artwork")
}
