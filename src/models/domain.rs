use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-valued flag for behavioral compatibility and household attributes.
///
/// The upstream records store these as nullable booleans; an absent value
/// means "never recorded", which must stay distinct from an explicit `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl TriState {
    pub fn from_db(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::True,
            Some(false) => TriState::False,
            None => TriState::Unknown,
        }
    }

    /// Wire representation: `true`/`false`/`null`.
    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    pub fn is_false(self) -> bool {
        self == TriState::False
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        TriState::from_db(value)
    }
}

/// Lifecycle status of an animal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    Arrived,
    Adoptable,
    Reserved,
    Adopted,
    Deceased,
    Unavailable,
    Transferred,
}

impl AnimalStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "arrived" => Some(AnimalStatus::Arrived),
            "adoptable" => Some(AnimalStatus::Adoptable),
            "reserved" => Some(AnimalStatus::Reserved),
            "adopted" => Some(AnimalStatus::Adopted),
            "deceased" => Some(AnimalStatus::Deceased),
            "unavailable" => Some(AnimalStatus::Unavailable),
            "transferred" => Some(AnimalStatus::Transferred),
            _ => None,
        }
    }
}

/// Approval status of a foster family. Only `Active` families participate in
/// matching; the others are excluded entirely, not down-scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyStatus {
    Active,
    Suspended,
    Terminated,
}

impl FamilyStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(FamilyStatus::Active),
            "suspended" => Some(FamilyStatus::Suspended),
            "terminated" => Some(FamilyStatus::Terminated),
            _ => None,
        }
    }
}

/// Target animal as loaded for a match request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalSummary {
    pub id: i64,
    pub name: String,
    pub status: AnimalStatus,
    #[serde(rename = "speciesId")]
    pub species_id: i64,
    #[serde(rename = "speciesLabel")]
    pub species_label: String,
}

/// Latest behavioral note for an animal. Multiple notes may exist per animal;
/// the store returns the most recent one (date desc, id desc).
#[derive(Debug, Clone)]
pub struct BehaviorAssessment {
    pub dog_ok: TriState,
    pub cat_ok: TriState,
    pub child_ok: TriState,
    pub score: Option<i32>,
    pub assessed_on: NaiveDate,
}

/// Contact subset of the person linked to a foster family.
#[derive(Debug, Clone)]
pub struct PersonContact {
    pub last_name: String,
    pub first_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub garden: TriState,
}

/// One foster placement as the matcher consumes it: the end date (absent =
/// open-ended) and the hosted animal's species label.
#[derive(Debug, Clone)]
pub struct PlacementSummary {
    pub end_date: Option<NaiveDate>,
    pub species_label: Option<String>,
}

/// A foster family with its person contact and full placement history.
#[derive(Debug, Clone)]
pub struct FosterFamily {
    pub id: i64,
    pub person_id: i64,
    pub approved_on: NaiveDate,
    pub status: FamilyStatus,
    pub notes: Option<String>,
    pub contact: PersonContact,
    pub placements: Vec<PlacementSummary>,
}

/// Scored match record for one family, as returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMatch {
    #[serde(rename = "familyId")]
    pub family_id: i64,
    pub score: u32,
    pub reasons: Vec<String>,
    #[serde(rename = "availableAt")]
    pub available_at: Option<NaiveDate>,
    #[serde(rename = "activeAnimalCount")]
    pub active_animal_count: usize,
    #[serde(rename = "totalPlacementCount")]
    pub total_placement_count: usize,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "activeSpeciesList")]
    pub active_species_list: Vec<String>,
}

/// Animal currently without an active placement, eligible for fostering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableAnimal {
    pub id: i64,
    pub name: String,
    pub status: AnimalStatus,
    #[serde(rename = "arrivedOn")]
    pub arrived_on: NaiveDate,
    #[serde(rename = "speciesLabel")]
    pub species_label: Option<String>,
}

/// Score adjustments used by the compatibility scorer. All values are applied
/// on top of `base`; `occupancy_penalty` and `conflict_penalty` subtract.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub base: i64,
    pub immediate_bonus: i64,
    pub occupancy_penalty: i64,
    pub species_match_bonus: i64,
    pub empty_slate_bonus: i64,
    pub other_species_bonus: i64,
    pub conflict_penalty: i64,
    pub conflict_relief_bonus: i64,
    pub garden_bonus: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 50,
            immediate_bonus: 30,
            occupancy_penalty: 15,
            species_match_bonus: 15,
            empty_slate_bonus: 10,
            other_species_bonus: 5,
            conflict_penalty: 25,
            conflict_relief_bonus: 8,
            garden_bonus: 5,
        }
    }
}
