//! Job catalog — the source of postings the deck is dealt from.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`. `StaticCatalog` serves the
//! built-in seed or a JSON file loaded at startup; a live-fetch backend
//! would implement the same trait.

pub mod handlers;
pub mod seed;
pub mod taxonomy;

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::{JobPosting, ModelError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid posting: {0}")]
    Invalid(#[from] ModelError),

    #[error("duplicate job id {0}")]
    DuplicateId(u32),
}

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// All postings in deck order.
    async fn list(&self) -> Result<Vec<JobPosting>, CatalogError>;

    async fn get(&self, id: u32) -> Result<Option<JobPosting>, CatalogError>;
}

/// In-memory catalog, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    jobs: Vec<JobPosting>,
}

impl StaticCatalog {
    /// Validates every posting and rejects repeated ids.
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for job in &jobs {
            job.validate()?;
            if !ids.insert(job.id) {
                return Err(CatalogError::DuplicateId(job.id));
            }
        }
        Ok(Self { jobs })
    }

    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::seed_jobs())
    }

    /// Loads a JSON array of postings.
    pub async fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let jobs: Vec<JobPosting> = read_json(path).await?;
        let catalog = Self::new(jobs)?;
        info!("Loaded {} postings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

#[async_trait]
impl JobCatalog for StaticCatalog {
    async fn list(&self) -> Result<Vec<JobPosting>, CatalogError> {
        Ok(self.jobs.clone())
    }

    async fn get(&self, id: u32) -> Result<Option<JobPosting>, CatalogError> {
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }
}

/// Reads and deserializes a JSON config file (catalog, lexicon, taxonomy).
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}
