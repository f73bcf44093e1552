use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::domain::{
    AnimalSummary, AvailableAnimal, BehaviorAssessment, FamilyMatch, FamilyStatus, FosterFamily,
};
use crate::core::availability::AvailabilitySnapshot;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFamiliesResponse {
    pub animal: AnimalSummary,
    #[serde(rename = "behaviorAssessment")]
    pub behavior_assessment: Option<AssessmentView>,
    pub matches: Vec<FamilyMatch>,
}

/// Wire view of a behavior assessment; tri-state flags serialize as
/// `true`/`false`/`null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentView {
    #[serde(rename = "dogOk")]
    pub dog_ok: Option<bool>,
    #[serde(rename = "catOk")]
    pub cat_ok: Option<bool>,
    #[serde(rename = "childOk")]
    pub child_ok: Option<bool>,
    pub score: Option<i32>,
    #[serde(rename = "assessmentDate")]
    pub assessment_date: NaiveDate,
}

impl From<&BehaviorAssessment> for AssessmentView {
    fn from(assessment: &BehaviorAssessment) -> Self {
        Self {
            dog_ok: assessment.dog_ok.as_option(),
            cat_ok: assessment.cat_ok.as_option(),
            child_ok: assessment.child_ok.as_option(),
            score: assessment.score,
            assessment_date: assessment.assessed_on,
        }
    }
}

/// Response for the family listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyListResponse {
    pub families: Vec<FamilySummaryView>,
    pub total: usize,
}

/// One family row in the listing, with its availability summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilySummaryView {
    pub id: i64,
    #[serde(rename = "personId")]
    pub person_id: i64,
    #[serde(rename = "approvedOn")]
    pub approved_on: NaiveDate,
    pub status: FamilyStatus,
    pub notes: Option<String>,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub garden: Option<bool>,
    #[serde(rename = "activeAnimalCount")]
    pub active_animal_count: usize,
    #[serde(rename = "totalPlacementCount")]
    pub total_placement_count: usize,
    #[serde(rename = "activeSpecies")]
    pub active_species: Vec<String>,
    #[serde(rename = "nextEnd")]
    pub next_end: Option<NaiveDate>,
}

impl FamilySummaryView {
    /// Builds the listing row from a family and its availability snapshot.
    /// The species list is sorted alphabetically for display, unlike the
    /// match output which keeps placement order.
    pub fn from_snapshot(family: &FosterFamily, snapshot: &AvailabilitySnapshot) -> Self {
        Self {
            id: family.id,
            person_id: family.person_id,
            approved_on: family.approved_on,
            status: family.status,
            notes: family.notes.clone(),
            family_name: family.contact.last_name.clone(),
            first_name: family.contact.first_name.clone(),
            email: family.contact.email.clone(),
            phone: family.contact.phone.clone(),
            city: family.contact.city.clone(),
            country: family.contact.country.clone(),
            garden: family.contact.garden.as_option(),
            active_animal_count: snapshot.active_count,
            total_placement_count: snapshot.total_count,
            active_species: snapshot.species.sorted(),
            next_end: snapshot.next_end,
        }
    }
}

/// Response for the available-animals endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableAnimalsResponse {
    pub animals: Vec<AvailableAnimal>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
