/* src/server/src/config.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use folio_content::Locale;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub contact: ContactSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_site_name")]
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_assets_dir")]
  pub assets_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
  /// Simulated delivery delay for the contact endpoint.
  #[serde(default = "default_delay_ms")]
  pub delay_ms: u64,
}

fn default_site_name() -> String {
  "folio".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_assets_dir() -> String {
  "public".to_string()
}

fn default_locales() -> Vec<String> {
  vec!["fr".to_string(), "en".to_string()]
}

fn default_locale() -> String {
  Locale::DEFAULT.code().to_string()
}

fn default_delay_ms() -> u64 {
  2000
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { name: default_site_name() }
  }
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), assets_dir: default_assets_dir() }
  }
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { locales: default_locales(), default: default_locale() }
  }
}

impl Default for ContactSection {
  fn default() -> Self {
    Self { delay_ms: default_delay_ms() }
  }
}

impl SiteConfig {
  /// Load configuration. An explicit path must exist; otherwise
  /// `folio.toml` in the working directory is used when present, and
  /// defaults apply when it is not.
  pub fn load(explicit: Option<&Path>) -> Result<SiteConfig> {
    let path = match explicit {
      Some(path) => path.to_path_buf(),
      None => {
        let default = Path::new(CONFIG_FILE);
        if !default.exists() {
          return Ok(SiteConfig::default());
        }
        default.to_path_buf()
      }
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let config: SiteConfig =
      toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.i18n.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.i18n.locales.contains(&self.i18n.default) {
      bail!("i18n.default \"{}\" is not in i18n.locales {:?}", self.i18n.default, self.i18n.locales);
    }
    for code in &self.i18n.locales {
      if Locale::from_code(code).is_none() {
        bail!("unsupported locale \"{code}\" (supported: fr, en)");
      }
    }
    Ok(())
  }
}
