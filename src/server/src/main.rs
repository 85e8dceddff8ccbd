/* src/server/src/main.rs */

mod config;
mod error;
mod handler;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use folio_content::{Locale, parity};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::handler::{AppState, build_router};

const PAGE_TEMPLATE: &str = include_str!("../assets/portfolio.html");

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Bilingual single-page portfolio server")]
struct Cli {
  /// Port to listen on (overrides the config file)
  #[arg(long, short)]
  port: Option<u16>,
  /// Path to folio.toml
  #[arg(long)]
  config: Option<PathBuf>,
  /// Static assets directory (overrides the config file)
  #[arg(long)]
  assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();
  let mut config = SiteConfig::load(cli.config.as_deref())?;
  if let Some(port) = cli.port {
    config.server.port = port;
  }
  if let Some(assets) = cli.assets {
    config.server.assets_dir = assets.display().to_string();
  }
  config.validate()?;

  // Refuse to serve tables that would render differently per language.
  parity::check(Locale::Fr.table(), Locale::En.table()).context("locale tables out of parity")?;

  let state = AppState {
    site_name: config.site.name.clone(),
    template: PAGE_TEMPLATE.to_string(),
    submit_delay: Duration::from_millis(config.contact.delay_ms),
  };
  let router = build_router(state, Path::new(&config.server.assets_dir));

  let addr = format!("0.0.0.0:{}", config.server.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("bind {addr}"))?;
  let port = listener.local_addr()?.port();
  info!(port, locales = ?Locale::ALL.map(Locale::code), "folio running");
  axum::serve(listener, router).await?;
  Ok(())
}
