// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnimalStatus, AnimalSummary, AvailableAnimal, BehaviorAssessment, FamilyMatch, FamilyStatus,
    FosterFamily, PersonContact, PlacementSummary, ScoringWeights, TriState,
};
pub use requests::{AvailableAnimalsQuery, MatchFamiliesRequest};
pub use responses::{
    AssessmentView, AvailableAnimalsResponse, ErrorResponse, FamilyListResponse,
    FamilySummaryView, HealthResponse, MatchFamiliesResponse,
};
