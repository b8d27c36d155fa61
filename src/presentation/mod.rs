mod detail_item;
mod links;

pub use detail_item::{partner_items, studio_items, AdditionalData, DetailItem, DisplayPart};
pub use links::{SceneLinkBuilder, StashLinks};
