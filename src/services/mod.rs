pub mod affinity_service;
pub mod partners;
pub mod ranking;
pub mod studios;
pub mod text_utils;

pub use affinity_service::{find_performer, resolve_featured, AffinityService};
pub use partners::{compute_partner_stats, CategoryResult, PartnerAggregator, PartnerStats};
pub use ranking::{rank, rank_by, Tally};
pub use studios::{compute_studio_stats, StudioAggregator, StudioStats};
