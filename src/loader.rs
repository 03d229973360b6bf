//! Data loader state
//!
//! The record is fetched once on mount. Until it arrives the page shows a
//! placeholder; a failed load is kept as an explicit state so it can be
//! rendered instead of leaving the placeholder up forever.

use crate::data::PortfolioData;
use crate::error::LoadError;

/// Current phase of the one-shot data load
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Request in flight
    #[default]
    Loading,
    /// Record available for rendering
    Loaded(PortfolioData),
    /// Request or parse failed; no retry
    Failed(LoadError),
}

impl LoadState {
    /// Settle the load with its outcome
    pub fn resolve(&mut self, result: Result<PortfolioData, LoadError>) {
        if !matches!(self, LoadState::Loading) {
            log::warn!("Data load resolved twice, keeping first result");
            return;
        }
        *self = match result {
            Ok(data) => {
                log::info!(
                    "Loaded portfolio for {} ({} skill categories, {} projects)",
                    data.profile.name,
                    data.skills.len(),
                    data.projects.len()
                );
                LoadState::Loaded(data)
            }
            Err(err) => {
                log::error!("Failed to load portfolio data: {}", err);
                LoadState::Failed(err)
            }
        };
    }

    pub fn data(&self) -> Option<&PortfolioData> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Read a record from disk (native prerender)
#[cfg(not(target_arch = "wasm32"))]
pub fn load_file(path: &std::path::Path) -> Result<PortfolioData, LoadError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Fetch(format!("{}: {}", path.display(), e)))?;
    PortfolioData::from_json(&json)
}
