use crate::domain::storage::SceneSource;
use crate::domain::{Scene, ScenesQueryResult, Studio, StudiosQueryResult};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads query results previously saved as JSON.
#[derive(Clone)]
pub struct FileSystemStore {
    scenes_path: PathBuf,
    studios_path: Option<PathBuf>,
}

impl FileSystemStore {
    pub fn new(scenes_path: impl Into<PathBuf>, studios_path: Option<PathBuf>) -> Self {
        Self {
            scenes_path: scenes_path.into(),
            studios_path,
        }
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl SceneSource for FileSystemStore {
    fn load_scenes(&self) -> Result<Vec<Scene>> {
        let result: ScenesQueryResult = self.read_json_file(&self.scenes_path)?;
        if result.count != result.scenes.len() {
            warn!(
                "Scenes file reports {} scenes but contains {}",
                result.count,
                result.scenes.len()
            );
        }
        info!("Loaded {} scenes from {:?}", result.scenes.len(), self.scenes_path);
        Ok(result.scenes)
    }

    fn load_studios(&self) -> Result<Vec<Studio>> {
        let Some(path) = &self.studios_path else {
            info!("No studios file given, networks cannot be resolved");
            return Ok(Vec::new());
        };

        let result: StudiosQueryResult = self.read_json_file(path)?;
        info!("Loaded {} studios from {:?}", result.studios.len(), path);
        Ok(result.studios)
    }
}
