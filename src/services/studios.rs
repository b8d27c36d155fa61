use crate::config::StudioConfig;
use crate::domain::{RankedResult, Scene, Studio, StudioCatalog, StudioRef, TallyEntry};
use crate::error::Result;
use crate::services::ranking::rank;
use serde::Serialize;
use tracing::debug;

/// Top studio and, optionally, top network for one performer.
///
/// `network` is only ever present alongside `primary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudioStats {
    pub primary: Option<RankedResult<Studio>>,
    pub network: Option<RankedResult<StudioRef>>,
    pub maximum_tops: usize,
}

impl StudioStats {
    fn none(maximum_tops: usize) -> Self {
        Self {
            primary: None,
            network: None,
            maximum_tops,
        }
    }

    /// Studio leaders under the display cap and the number left out.
    pub fn primary_tops(&self) -> Option<(&[TallyEntry<Studio>], usize)> {
        self.primary
            .as_ref()
            .map(|result| result.capped(self.maximum_tops))
    }

    pub fn network_tops(&self) -> Option<(&[TallyEntry<StudioRef>], usize)> {
        self.network
            .as_ref()
            .map(|result| result.capped(self.maximum_tops))
    }
}

pub struct StudioAggregator {
    config: StudioConfig,
}

impl StudioAggregator {
    pub fn new(config: StudioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn aggregate(&self, scenes: &[Scene], catalog: &StudioCatalog) -> StudioStats {
        let minimum = self.config.minimum_appearances;
        let maximum_tops = self.config.maximum_tops as usize;

        // Scenes without a studio contribute nothing
        let studios = scenes.iter().filter_map(|scene| scene.studio.clone());
        let Some(primary) = rank(studios, minimum).into_satisfying() else {
            debug!("No studio reaches {} scenes", minimum);
            return StudioStats::none(maximum_tops);
        };
        debug!(
            "Top studio count {} across {} leaders",
            primary.max_count,
            primary.leaders.len()
        );

        let network = if self.config.include_network {
            self.rank_networks(scenes, catalog)
        } else {
            None
        };

        StudioStats {
            primary: Some(primary),
            network,
            maximum_tops,
        }
    }

    /// Resolved from scratch per scene; never derived from the studio leaders.
    fn rank_networks(
        &self,
        scenes: &[Scene],
        catalog: &StudioCatalog,
    ) -> Option<RankedResult<StudioRef>> {
        let networks = scenes
            .iter()
            .filter_map(|scene| scene.studio.as_ref())
            .filter_map(|studio| catalog.network_of(&studio.id));

        let result = rank(networks, self.config.minimum_appearances);
        debug!(
            "Top network count {} across {} leaders",
            result.max_count,
            result.leaders.len()
        );
        result.into_satisfying()
    }
}

/// Validates `config` and ranks the studios (and networks) behind `scenes`.
///
/// `scenes` must already be the featured performer's scenes. The id only tags the
/// log line and has no effect on the ranking.
pub fn compute_studio_stats(
    scenes: &[Scene],
    featured_id: &str,
    catalog: &StudioCatalog,
    config: &StudioConfig,
) -> Result<StudioStats> {
    debug!(
        "Ranking studios over {} scenes of performer {}",
        scenes.len(),
        featured_id
    );
    Ok(StudioAggregator::new(*config)?.aggregate(scenes, catalog))
}
