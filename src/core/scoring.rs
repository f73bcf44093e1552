use crate::core::availability::AvailabilitySnapshot;
use crate::models::{BehaviorAssessment, ScoringWeights, TriState};

/// Species labels the dog/cat conflict rules key on. The store carries the
/// shelter's French labels.
pub const DOG_LABEL: &str = "chien";
pub const CAT_LABEL: &str = "chat";

/// Compute the suitability score of one family for an animal
///
/// Scoring formula (all adjustments additive on the base):
/// - no active placement: +immediate_bonus, else -occupancy_penalty per
///   active placement
/// - target species among hosted species (case-insensitive):
///   +species_match_bonus; empty hosted set: +empty_slate_bonus; otherwise
///   +other_species_bonus
/// - assessment flags explicitly incompatible with dogs/cats:
///   -conflict_penalty when the conflicting species is hosted, else
///   +conflict_relief_bonus (each flag independently)
/// - garden explicitly present: +garden_bonus
///
/// The result is floored at 0. Reasons are emitted in the order the rules
/// run, so identical inputs produce an identical reason list.
pub fn score_family(
    species_label: &str,
    assessment: Option<&BehaviorAssessment>,
    snapshot: &AvailabilitySnapshot,
    garden: TriState,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let mut score = weights.base;
    let mut reasons = Vec::new();

    // Availability
    if snapshot.active_count == 0 {
        score += weights.immediate_bonus;
        reasons.push("available immediately".to_string());
    } else {
        score -= weights.occupancy_penalty * snapshot.active_count as i64;
        match snapshot.next_end {
            Some(end) => reasons.push(format!("available after {}", end.format("%Y-%m-%d"))),
            None => reasons.push(format!(
                "{} animal(s) already hosted",
                snapshot.active_count
            )),
        }
    }

    // Species experience
    if snapshot.species.contains_ignore_case(species_label) {
        score += weights.species_match_bonus;
        reasons.push(format!(
            "recent experience with {}",
            species_label.to_lowercase()
        ));
    } else if snapshot.species.is_empty() {
        score += weights.empty_slate_bonus;
        reasons.push("no species in progress, fully available".to_string());
    } else {
        score += weights.other_species_bonus;
        reasons.push(format!("currently hosting: {}", snapshot.species.joined()));
    }

    // Behavioral compatibility; only explicit `false` flags carry weight
    match assessment {
        Some(note) => {
            if note.dog_ok.is_false() {
                if snapshot.species.contains_ignore_case(DOG_LABEL) {
                    score -= weights.conflict_penalty;
                    reasons.push(
                        "not compatible with dogs, family already hosts a dog".to_string(),
                    );
                } else {
                    score += weights.conflict_relief_bonus;
                    reasons.push("no dog currently hosted".to_string());
                }
            }

            if note.cat_ok.is_false() {
                if snapshot.species.contains_ignore_case(CAT_LABEL) {
                    score -= weights.conflict_penalty;
                    reasons.push(
                        "not compatible with cats, family already hosts a cat".to_string(),
                    );
                } else {
                    score += weights.conflict_relief_bonus;
                    reasons.push("no cat currently hosted".to_string());
                }
            }
        }
        None => {
            reasons.push("no recent behavior note".to_string());
        }
    }

    // Garden bonus
    if garden.is_true() {
        score += weights.garden_bonus;
        reasons.push("has a garden".to_string());
    }

    (score.max(0) as u32, reasons)
}
