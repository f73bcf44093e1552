use chrono::NaiveDate;

use crate::core::availability::availability_snapshot;
use crate::core::scoring::score_family;
use crate::models::{BehaviorAssessment, FamilyMatch, FamilyStatus, FosterFamily, ScoringWeights};

/// Result of ranking the foster families for one animal
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<FamilyMatch>,
    pub total_families: usize,
}

/// Match ranker - scores every active foster family for a target animal
///
/// The ranker is pure: it consumes family rows already loaded from the store,
/// computes each family's availability snapshot and compatibility score, and
/// returns the records sorted best-first. It never mutates anything.
#[derive(Debug, Clone)]
pub struct MatchRanker {
    weights: ScoringWeights,
}

impl MatchRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank families for an animal of the given species
    ///
    /// Families whose status is not `active` are excluded entirely. Output is
    /// sorted by score descending; the sort is stable, so families with equal
    /// scores keep the order they were supplied in (the store loads them by
    /// person name, which fixes tie order for a given dataset).
    pub fn rank(
        &self,
        species_label: &str,
        assessment: Option<&BehaviorAssessment>,
        families: &[FosterFamily],
        reference: NaiveDate,
    ) -> RankResult {
        let total_families = families.len();

        let mut matches: Vec<FamilyMatch> = families
            .iter()
            .filter(|family| family.status == FamilyStatus::Active)
            .map(|family| {
                let snapshot = availability_snapshot(&family.placements, reference);
                let (score, reasons) = score_family(
                    species_label,
                    assessment,
                    &snapshot,
                    family.contact.garden,
                    &self.weights,
                );

                FamilyMatch {
                    family_id: family.id,
                    score,
                    reasons,
                    available_at: snapshot.next_end,
                    active_animal_count: snapshot.active_count,
                    total_placement_count: snapshot.total_count,
                    family_name: family.contact.last_name.clone(),
                    first_name: family.contact.first_name.clone(),
                    email: family.contact.email.clone(),
                    phone: family.contact.phone.clone(),
                    city: family.contact.city.clone(),
                    country: family.contact.country.clone(),
                    active_species_list: snapshot.species.to_vec(),
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));

        RankResult {
            matches,
            total_families,
        }
    }
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonContact, PlacementSummary, TriState};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn family(
        id: i64,
        last_name: &str,
        status: FamilyStatus,
        garden: TriState,
        placements: Vec<PlacementSummary>,
    ) -> FosterFamily {
        FosterFamily {
            id,
            person_id: id * 10,
            approved_on: date("2023-01-01"),
            status,
            notes: None,
            contact: PersonContact {
                last_name: last_name.to_string(),
                first_name: "Test".to_string(),
                email: Some(format!("{}@example.org", last_name.to_lowercase())),
                phone: None,
                city: Some("Lyon".to_string()),
                country: Some("France".to_string()),
                garden,
            },
            placements,
        }
    }

    fn placement(end: Option<&str>, species: &str) -> PlacementSummary {
        PlacementSummary {
            end_date: end.map(|e| date(e)),
            species_label: Some(species.to_string()),
        }
    }

    #[test]
    fn non_active_families_are_excluded() {
        let ranker = MatchRanker::with_default_weights();
        let families = vec![
            family(1, "Martin", FamilyStatus::Active, TriState::Unknown, vec![]),
            family(2, "Durand", FamilyStatus::Suspended, TriState::True, vec![]),
            family(3, "Petit", FamilyStatus::Terminated, TriState::True, vec![]),
        ];

        let result = ranker.rank("Chien", None, &families, date("2024-06-01"));

        assert_eq!(result.total_families, 3);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].family_id, 1);
    }

    #[test]
    fn matches_sorted_by_score_descending() {
        let ranker = MatchRanker::with_default_weights();
        let families = vec![
            // One active dog ending in July, garden: 50 - 15 + 15 + 5 = 55
            family(
                1,
                "Martin",
                FamilyStatus::Active,
                TriState::True,
                vec![placement(Some("2024-07-01"), "Chien")],
            ),
            // Empty, no garden: 50 + 30 + 10 = 90
            family(2, "Durand", FamilyStatus::Active, TriState::False, vec![]),
        ];

        let result = ranker.rank("Chien", None, &families, date("2024-06-01"));

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].family_id, 2);
        assert_eq!(result.matches[0].score, 90);
        assert_eq!(result.matches[1].family_id, 1);
        assert_eq!(result.matches[1].score, 55);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranker = MatchRanker::with_default_weights();
        let families = vec![
            family(7, "Bernard", FamilyStatus::Active, TriState::Unknown, vec![]),
            family(3, "Moreau", FamilyStatus::Active, TriState::Unknown, vec![]),
            family(5, "Roux", FamilyStatus::Active, TriState::Unknown, vec![]),
        ];

        let result = ranker.rank("Chien", None, &families, date("2024-06-01"));

        let ids: Vec<i64> = result.matches.iter().map(|m| m.family_id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn rank_is_deterministic() {
        let ranker = MatchRanker::with_default_weights();
        let families = vec![
            family(
                1,
                "Martin",
                FamilyStatus::Active,
                TriState::True,
                vec![placement(None, "Chat"), placement(Some("2024-08-15"), "Chien")],
            ),
            family(2, "Durand", FamilyStatus::Active, TriState::Unknown, vec![]),
        ];

        let first = ranker.rank("Chat", None, &families, date("2024-06-01"));
        let second = ranker.rank("Chat", None, &families, date("2024-06-01"));

        let flat = |result: &RankResult| {
            result
                .matches
                .iter()
                .map(|m| (m.family_id, m.score, m.reasons.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(flat(&first), flat(&second));
    }

    #[test]
    fn match_record_carries_availability_fields() {
        let ranker = MatchRanker::with_default_weights();
        let families = vec![family(
            1,
            "Martin",
            FamilyStatus::Active,
            TriState::Unknown,
            vec![
                placement(Some("2024-07-01"), "Chien"),
                placement(Some("2024-01-01"), "Chat"),
            ],
        )];

        let result = ranker.rank("Lapin", None, &families, date("2024-06-01"));
        let record = &result.matches[0];

        assert_eq!(record.available_at, Some(date("2024-07-01")));
        assert_eq!(record.active_animal_count, 1);
        assert_eq!(record.total_placement_count, 2);
        assert_eq!(record.active_species_list, vec!["Chien"]);
    }
}
