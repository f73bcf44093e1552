use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank foster families for an animal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchFamiliesRequest {
    /// Identifier of the target animal; must be positive. Rejected before any
    /// data access when out of range.
    #[validate(range(min = 1))]
    #[serde(alias = "animal_id", rename = "animalId")]
    pub animal_id: i64,
    /// Day the availability windows are evaluated against. Defaults to today.
    #[serde(default)]
    #[serde(alias = "reference_date", rename = "referenceDate")]
    pub reference_date: Option<NaiveDate>,
}

/// Query parameters for the available-animals listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableAnimalsQuery {
    #[serde(default)]
    #[serde(alias = "reference_date", rename = "referenceDate")]
    pub reference_date: Option<NaiveDate>,
}
