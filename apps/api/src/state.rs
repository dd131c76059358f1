use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::taxonomy::SkillTaxonomy;
use crate::catalog::{read_json, JobCatalog, StaticCatalog};
use crate::config::Config;
use crate::scoring::{MatchEngine, RedFlagLexicon};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pure scorer; shared without locking.
    pub engine: Arc<MatchEngine>,
    /// Pluggable posting source. Default: the seed catalog.
    pub catalog: Arc<dyn JobCatalog>,
    pub taxonomy: Arc<SkillTaxonomy>,
}

impl AppState {
    /// Builds state from config, loading any configured JSON overrides.
    pub async fn load(config: &Config) -> Result<Self> {
        let lexicon = match &config.lexicon_path {
            Some(path) => {
                let lexicon: RedFlagLexicon = read_json(path)
                    .await
                    .with_context(|| format!("loading red-flag lexicon from {}", path.display()))?;
                info!("Red-flag lexicon loaded from {}", path.display());
                lexicon
            }
            None => RedFlagLexicon::default(),
        };
        info!(
            "Red-flag lexicon: {} critical, {} warning, {} positive phrases",
            lexicon.critical().len(),
            lexicon.warning().len(),
            lexicon.positive().len()
        );

        let catalog = match &config.catalog_path {
            Some(path) => StaticCatalog::from_path(path)
                .await
                .with_context(|| format!("loading job catalog from {}", path.display()))?,
            None => StaticCatalog::seeded().context("seed catalog is invalid")?,
        };
        info!("Job catalog ready ({} postings)", catalog.len());

        let taxonomy = match &config.taxonomy_path {
            Some(path) => read_json(path)
                .await
                .with_context(|| format!("loading skill taxonomy from {}", path.display()))?,
            None => SkillTaxonomy::default(),
        };

        let scoring = config.scoring_config();
        info!("Salary ceiling: {}", scoring.salary_ceiling);

        Ok(Self {
            engine: Arc::new(MatchEngine::new(lexicon, scoring)),
            catalog: Arc::new(catalog),
            taxonomy: Arc::new(taxonomy),
        })
    }
}
