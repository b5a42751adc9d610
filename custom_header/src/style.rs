//! Utility-class tokens for the page header.
//!
//! The header never interprets these strings; they are handed to Tailwind as-is.
//! A [`HeaderStyle`] is loaded once by the app and provided through context, so
//! components pick it up with [`use_header_style`].

use config::{Config, Environment, File, FileFormat};
use dioxus::prelude::*;
use serde::Deserialize;

const EMBEDDED_STYLE: &str = include_str!("../config/header.toml");
const ENV_PREFIX: &str = "HEADER";

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Failed to load header style: {0}")]
    Config(#[from] config::ConfigError),
}

/// Class tokens for each node of the header. Missing fields fall back to the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderStyle {
    pub container: String,
    pub icon_wrapper: String,
    pub title: String,
    pub description: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            container: "flex".to_string(),
            icon_wrapper: "w-32 md:w-16".to_string(),
            title: "text-3xl md:text-[52px] text-primary".to_string(),
            description: "text-[#31373D] text-[22px] mt-4".to_string(),
        }
    }
}

impl HeaderStyle {
    /// Load the bundled style, letting `HEADER_*` environment variables override single fields
    /// (e.g. `HEADER_TITLE`).
    pub fn load() -> Result<Self, StyleError> {
        let settings = Config::builder()
            .add_source(File::from_str(EMBEDDED_STYLE, FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let style: Self = settings.try_deserialize()?;
        tracing::debug!(?style, "Loaded header style");
        Ok(style)
    }

    /// Parse a style from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Returns the style provided by an ancestor, or the default one when nothing was provided.
pub fn use_header_style() -> HeaderStyle {
    try_use_context::<HeaderStyle>().unwrap_or_default()
}
