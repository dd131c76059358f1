use std::num::NonZeroU64;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::ScoringConfig;

/// Application configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON `{critical, warning, positive}`; defaults to the stock lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// JSON array of postings; defaults to the seed catalog.
    pub catalog_path: Option<PathBuf>,
    /// JSON map of role → skill tiers; defaults to the stock taxonomy.
    pub taxonomy_path: Option<PathBuf>,
    pub salary_ceiling: Option<NonZeroU64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            lexicon_path: optional_path("LEXICON_PATH"),
            catalog_path: optional_path("CATALOG_PATH"),
            taxonomy_path: optional_path("TAXONOMY_PATH"),
            salary_ceiling: parse_salary_ceiling(std::env::var("SALARY_CEILING").ok())?,
        })
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        let base = ScoringConfig::default();
        match self.salary_ceiling {
            Some(ceiling) => base.with_salary_ceiling(ceiling),
            None => base,
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

fn parse_salary_ceiling(raw: Option<String>) -> Result<Option<NonZeroU64>> {
    raw.map(|v| {
        v.trim()
            .parse::<NonZeroU64>()
            .with_context(|| format!("SALARY_CEILING must be a positive integer, got '{v}'"))
    })
    .transpose()
}
