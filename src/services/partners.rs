use crate::config::PartnerConfig;
use crate::domain::{Gender, Performer, RankedResult, Scene};
use crate::error::Result;
use crate::services::ranking::{rank, rank_by};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub category: Gender,
    pub result: RankedResult<Performer>,
}

/// Most frequent co-performers, either overall or one result per gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PartnerStats {
    /// `None` when nobody clears the threshold
    Overall(Option<RankedResult<Performer>>),
    /// Only categories that clear the threshold, in `Gender::ALL` order
    ByCategory(Vec<CategoryResult>),
}

impl PartnerStats {
    pub fn is_empty(&self) -> bool {
        match self {
            PartnerStats::Overall(result) => result.is_none(),
            PartnerStats::ByCategory(results) => results.is_empty(),
        }
    }
}

pub struct PartnerAggregator {
    config: PartnerConfig,
}

impl PartnerAggregator {
    pub fn new(config: PartnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn aggregate(&self, scenes: &[Scene], featured_id: &str) -> PartnerStats {
        let observations = Self::partners_of(scenes, featured_id);
        let minimum = self.config.minimum_appearances;

        if !self.config.partition_by_category {
            let result = rank(observations, minimum);
            debug!(
                "Top partner count {} across {} leaders (threshold {})",
                result.max_count,
                result.leaders.len(),
                minimum
            );
            return PartnerStats::Overall(result.into_satisfying());
        }

        // Performers without a gender belong to no category
        let mut by_gender = rank_by(observations, minimum, |partner| partner.gender);

        let results = Gender::ALL
            .iter()
            .filter_map(|gender| {
                let result = by_gender.remove(gender)?.into_satisfying()?;
                debug!("Top {} partner count {}", gender.label(), result.max_count);
                Some(CategoryResult {
                    category: *gender,
                    result,
                })
            })
            .collect();

        PartnerStats::ByCategory(results)
    }

    fn partners_of<'a>(
        scenes: &'a [Scene],
        featured_id: &'a str,
    ) -> impl Iterator<Item = Performer> + 'a {
        scenes
            .iter()
            .flat_map(|scene| scene.performers.iter())
            .filter(move |performer| performer.id != featured_id)
            .cloned()
    }
}

/// Validates `config` and ranks co-performers of `featured_id` in one call.
pub fn compute_partner_stats(
    scenes: &[Scene],
    featured_id: &str,
    config: &PartnerConfig,
) -> Result<PartnerStats> {
    Ok(PartnerAggregator::new(*config)?.aggregate(scenes, featured_id))
}
