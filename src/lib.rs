//! Ranked co-occurrence statistics for a featured performer: who they appear with most,
//! and which studios and networks produced most of their scenes.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod services;

pub use config::{AffinityConfig, PartnerConfig, StudioConfig};
pub use domain::{
    Counterpart, Gender, Performer, PerformerReport, RankedResult, Scene, SceneSource, Studio,
    StudioCatalog, StudioRef, TallyEntry,
};
pub use error::{AffinityError, Result};
pub use services::{
    compute_partner_stats, compute_studio_stats, AffinityService, PartnerStats, StudioStats,
};
