use super::scene::{Studio, StudioRef};
use ahash::AHashMap;

/// Unfiltered studio lookup used to resolve a scene's studio to its network.
#[derive(Debug, Clone, Default)]
pub struct StudioCatalog {
    studios: AHashMap<String, Studio>,
}

impl StudioCatalog {
    pub fn new(studios: Vec<Studio>) -> Self {
        let mut index = AHashMap::with_capacity(studios.len());
        for studio in studios {
            // First record wins when the source lists an id twice
            index.entry(studio.id.clone()).or_insert(studio);
        }
        Self { studios: index }
    }

    pub fn len(&self) -> usize {
        self.studios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studios.is_empty()
    }

    pub fn resolve_studio_by_id(&self, id: &str) -> Option<&Studio> {
        self.studios.get(id)
    }

    /// The studio's parent when it has one, otherwise the studio itself.
    /// `None` when the id is not in the catalog.
    pub fn network_of(&self, studio_id: &str) -> Option<StudioRef> {
        let studio = self.resolve_studio_by_id(studio_id)?;
        Some(match &studio.parent_studio {
            Some(parent) => parent.clone(),
            None => studio.to_ref(),
        })
    }
}

impl FromIterator<Studio> for StudioCatalog {
    fn from_iter<I: IntoIterator<Item = Studio>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
