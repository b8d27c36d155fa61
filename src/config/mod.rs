use crate::error::{AffinityError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub(crate) mod cli;

pub use cli::Args;

/// Options read from the affinity config file. Every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityConfig {
    /// Minimum number of shared scenes before a counterpart is reported
    pub minimum_appearances: u32,
    /// Maximum number of tied studios/networks listed before "and N more"
    pub maximum_tops: u32,
    /// Report the most frequent partner once per gender instead of overall
    pub appears_most_with_gendered: bool,
    /// Also report the top network (parent studio)
    pub top_network_on: bool,
    /// Passed through to every detail item
    pub collapsed: bool,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            minimum_appearances: 2,
            maximum_tops: 3,
            appears_most_with_gendered: false,
            top_network_on: true,
            collapsed: false,
        }
    }
}

impl AffinityConfig {
    /// Loads the config file, or the defaults when it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        config.validate()?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.partner_config().validate()?;
        self.studio_config().validate()
    }

    pub fn partner_config(&self) -> PartnerConfig {
        PartnerConfig {
            minimum_appearances: self.minimum_appearances,
            partition_by_category: self.appears_most_with_gendered,
        }
    }

    pub fn studio_config(&self) -> StudioConfig {
        StudioConfig {
            minimum_appearances: self.minimum_appearances,
            maximum_tops: self.maximum_tops,
            include_network: self.top_network_on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerConfig {
    pub minimum_appearances: u32,
    pub partition_by_category: bool,
}

impl PartnerConfig {
    pub fn validate(&self) -> Result<()> {
        require_positive("minimum_appearances", self.minimum_appearances)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioConfig {
    pub minimum_appearances: u32,
    pub maximum_tops: u32,
    pub include_network: bool,
}

impl StudioConfig {
    pub fn validate(&self) -> Result<()> {
        require_positive("minimum_appearances", self.minimum_appearances)?;
        require_positive("maximum_tops", self.maximum_tops)
    }
}

fn require_positive(field: &'static str, value: u32) -> Result<()> {
    if value < 1 {
        return Err(AffinityError::InvalidConfig {
            field,
            reason: format!("must be at least 1, got {}", value),
        });
    }
    Ok(())
}
