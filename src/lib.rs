//! shelter-match - foster-family matching service for the shelter
//! case-management app
//!
//! This library implements the matching core: given an animal, it ranks the
//! shelter's active foster families by availability, species experience,
//! behavioral compatibility and household attributes.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{availability_snapshot, is_active, MatchRanker};
pub use crate::models::{
    BehaviorAssessment, FamilyMatch, FamilyStatus, FosterFamily, MatchFamiliesRequest,
    MatchFamiliesResponse, PlacementSummary, ScoringWeights, TriState,
};
