use crate::presentation::DetailItem;
use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformerReport {
    pub performer_id: String,
    pub performer_name: String,
    pub generated_at: String,
    pub total_scenes: usize,
    pub items: Vec<DetailItem>,
}

impl PerformerReport {
    pub fn new(
        performer_id: String,
        performer_name: String,
        total_scenes: usize,
        items: Vec<DetailItem>,
    ) -> Self {
        Self {
            performer_id,
            performer_name,
            generated_at: Local::now().to_rfc3339(),
            total_scenes,
            items,
        }
    }
}
