use crate::config::AffinityConfig;
use crate::domain::{Performer, PerformerReport, Scene, StudioCatalog};
use crate::error::{AffinityError, Result};
use crate::presentation::{partner_items, studio_items, SceneLinkBuilder, StashLinks};
use crate::services::partners::PartnerAggregator;
use crate::services::studios::StudioAggregator;
use tracing::{info, warn};

pub struct AffinityService {
    config: AffinityConfig,
    partners: PartnerAggregator,
    studios: StudioAggregator,
    links: Box<dyn SceneLinkBuilder>,
}

impl AffinityService {
    pub fn new(config: AffinityConfig) -> Result<Self> {
        Self::with_links(config, Box::new(StashLinks))
    }

    pub fn with_links(config: AffinityConfig, links: Box<dyn SceneLinkBuilder>) -> Result<Self> {
        let partners = PartnerAggregator::new(config.partner_config())?;
        let studios = StudioAggregator::new(config.studio_config())?;
        info!("Created new Affinity service");

        Ok(Self {
            config,
            partners,
            studios,
            links,
        })
    }

    /// Runs both aggregators over one snapshot and renders their detail items:
    /// partner items first, then top studio, then top network.
    pub fn build_report(
        &self,
        featured: &Performer,
        scenes: &[Scene],
        catalog: &StudioCatalog,
    ) -> PerformerReport {
        info!(
            "Building report for {} ({}) from {} scenes",
            featured.name,
            featured.id,
            scenes.len()
        );

        let partner_stats = self.partners.aggregate(scenes, &featured.id);
        let studio_stats = self.studios.aggregate(scenes, catalog);

        let mut items = partner_items(
            &partner_stats,
            featured,
            self.links.as_ref(),
            self.config.collapsed,
        );
        items.extend(studio_items(
            &studio_stats,
            featured,
            self.links.as_ref(),
            self.config.collapsed,
        ));

        info!("Report contains {} items", items.len());
        PerformerReport::new(
            featured.id.clone(),
            featured.name.clone(),
            scenes.len(),
            items,
        )
    }
}

/// Finds the featured performer's own record in the scene list.
pub fn find_performer<'a>(scenes: &'a [Scene], performer_id: &str) -> Option<&'a Performer> {
    scenes
        .iter()
        .flat_map(|scene| scene.performers.iter())
        .find(|performer| performer.id == performer_id)
}

/// The featured performer as recorded in `scenes`, or a bare record named `fallback_name`
/// when the id appears in no scene.
pub fn resolve_featured(
    scenes: &[Scene],
    performer_id: &str,
    fallback_name: Option<&str>,
) -> Result<Performer> {
    if let Some(performer) = find_performer(scenes, performer_id) {
        return Ok(performer.clone());
    }

    let name = fallback_name
        .ok_or_else(|| AffinityError::PerformerNotFound(performer_id.to_string()))?;
    warn!(
        "Performer {} appears in no scene, using name {:?}",
        performer_id, name
    );
    Ok(Performer {
        id: performer_id.to_string(),
        name: name.to_string(),
        gender: None,
    })
}
