// Core algorithm exports
pub mod availability;
pub mod interval;
pub mod matcher;
pub mod scoring;

pub use availability::{availability_snapshot, AvailabilitySnapshot, SpeciesSet};
pub use interval::{is_active, today};
pub use matcher::{MatchRanker, RankResult};
pub use scoring::score_family;
