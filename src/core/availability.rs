use chrono::NaiveDate;

use crate::core::interval::is_active;
use crate::models::PlacementSummary;

/// Insertion-ordered set of species labels.
///
/// Labels are deduplicated with case-sensitive equality, exactly as stored,
/// so the displayed species list reproduces the source records. Membership
/// for the species-match bonus is checked case-insensitively instead; that
/// asymmetry is deliberate and mirrors the scoring rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesSet {
    labels: Vec<String>,
}

impl SpeciesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label unless an identical (case-sensitive) one is present.
    pub fn insert(&mut self, label: &str) {
        if !self.labels.iter().any(|l| l == label) {
            self.labels.push(label.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Case-insensitive membership, used for the species-experience bonus and
    /// the dog/cat conflict checks.
    pub fn contains_ignore_case(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase() == needle)
    }

    /// Labels in insertion order, as the reason strings display them.
    pub fn to_vec(&self) -> Vec<String> {
        self.labels.clone()
    }

    /// Labels sorted alphabetically, for the family listing.
    pub fn sorted(&self) -> Vec<String> {
        let mut out = self.labels.clone();
        out.sort();
        out
    }

    /// Comma-joined labels in insertion order.
    pub fn joined(&self) -> String {
        self.labels.join(",")
    }
}

/// Availability snapshot for one family at a reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    /// Number of placements still active.
    pub active_count: usize,
    /// Distinct species among active placements, in placement order.
    pub species: SpeciesSet,
    /// Earliest defined end date among active placements; `None` when every
    /// active placement is open-ended or nothing is active.
    pub next_end: Option<NaiveDate>,
    /// All placements, active or not.
    pub total_count: usize,
}

/// Compute the availability snapshot for a family's placements
///
/// Deterministic for a given placement list and reference date; the inputs
/// are not mutated. `NaiveDate` ordering is identical to lexicographic
/// ordering of the ISO `YYYY-MM-DD` form, so `next_end` is the chronological
/// minimum.
pub fn availability_snapshot(
    placements: &[PlacementSummary],
    reference: NaiveDate,
) -> AvailabilitySnapshot {
    let mut species = SpeciesSet::new();
    let mut next_end: Option<NaiveDate> = None;
    let mut active_count = 0;

    for placement in placements {
        if !is_active(placement.end_date, reference) {
            continue;
        }
        active_count += 1;

        if let Some(label) = &placement.species_label {
            species.insert(label);
        }
        if let Some(end) = placement.end_date {
            if next_end.map_or(true, |current| end < current) {
                next_end = Some(end);
            }
        }
    }

    AvailabilitySnapshot {
        active_count,
        species,
        next_end,
        total_count: placements.len(),
    }
}
