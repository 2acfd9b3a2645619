use crate::market::image::DEFAULT_MAX_IMAGE_BYTES;
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Marketplace configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Tracing filter directive
    pub log_filter: String,
    /// Start with the demo listings
    pub seed_demo_listings: bool,
    pub currency_symbol: String,
    pub max_image_bytes: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            seed_demo_listings: true,
            currency_symbol: "د.م.".to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl MarketConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            log_filter: lookup("MARKET_LOG").unwrap_or(defaults.log_filter),
            seed_demo_listings: match lookup("MARKET_SEED") {
                Some(raw) => parse_bool(&raw).context("MARKET_SEED must be true or false")?,
                None => defaults.seed_demo_listings,
            },
            currency_symbol: lookup("MARKET_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            max_image_bytes: match lookup("MARKET_MAX_IMAGE_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .context("MARKET_MAX_IMAGE_BYTES must be a valid number")?,
                None => defaults.max_image_bytes,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean {:?}", other),
    }
}
