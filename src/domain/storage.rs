use super::{Scene, Studio};
use crate::error::Result;

/// Supplies the fully materialized inputs for one aggregation pass.
pub trait SceneSource {
    fn load_scenes(&self) -> Result<Vec<Scene>>;
    fn load_studios(&self) -> Result<Vec<Studio>>;
}
