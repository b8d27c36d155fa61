mod catalog;
mod ranking;
mod report;
mod scene;
pub(crate) mod storage;

pub use catalog::StudioCatalog;
pub use ranking::{Counterpart, RankedResult, TallyEntry};
pub use report::PerformerReport;
pub use scene::{Gender, Performer, Scene, ScenesQueryResult, Studio, StudioRef, StudiosQueryResult};
pub use storage::SceneSource;
