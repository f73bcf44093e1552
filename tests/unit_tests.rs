// Black-box tests over the matching core

use chrono::NaiveDate;
use shelter_match::core::{availability_snapshot, is_active, score_family, MatchRanker};
use shelter_match::models::{
    BehaviorAssessment, FamilyStatus, FosterFamily, PersonContact, PlacementSummary,
    ScoringWeights, TriState,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn placement(end: Option<&str>, species: &str) -> PlacementSummary {
    PlacementSummary {
        end_date: end.map(|e| date(e)),
        species_label: Some(species.to_string()),
    }
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
        approved_on: date("2023-03-15"),
        status,
        notes: None,
        contact: PersonContact {
            last_name: last_name.to_string(),
            first_name: "Test".to_string(),
            email: Some(format!("{}@example.org", last_name.to_lowercase())),
            phone: Some("0601020304".to_string()),
            city: Some("Lyon".to_string()),
            country: Some("France".to_string()),
            garden,
        },
        placements,
    }
}

#[test]
fn test_day_granularity_interval() {
    let reference = date("2024-06-01");
    assert!(is_active(None, reference));
    assert!(is_active(Some(date("2024-06-01")), reference));
    assert!(!is_active(Some(date("2024-05-31")), reference));
}

#[test]
fn test_immediate_availability_property() {
    // All placements ended before the reference date count as none active
    let placements = vec![
        placement(Some("2024-01-10"), "Chien"),
        placement(Some("2024-03-02"), "Chat"),
    ];
    let snapshot = availability_snapshot(&placements, date("2024-06-01"));
    assert_eq!(snapshot.active_count, 0);

    let (score, reasons) = score_family(
        "Chien",
        None,
        &snapshot,
        TriState::Unknown,
        &ScoringWeights::default(),
    );
    assert!(reasons.contains(&"available immediately".to_string()));
    // 50 + 30 + 10 empty slate
    assert_eq!(score, 90);
}

#[test]
fn test_monotonic_occupancy_penalty() {
    // Same species mix, strictly more active placements never scores higher
    let weights = ScoringWeights::default();
    let mut previous = u32::MAX;

    for count in 0..5 {
        let placements: Vec<PlacementSummary> =
            (0..count).map(|_| placement(None, "Lapin")).collect();
        let snapshot = availability_snapshot(&placements, date("2024-06-01"));
        let (score, _) = score_family("Chien", None, &snapshot, TriState::Unknown, &weights);
        assert!(score <= previous, "score must not increase with occupancy");
        previous = score;
    }
}

#[test]
fn test_species_match_bonus_and_reason() {
    let with_match = availability_snapshot(&[placement(None, "Chien")], date("2024-06-01"));
    let without_match = availability_snapshot(&[placement(None, "Lapin")], date("2024-06-01"));

    let weights = ScoringWeights::default();
    let (matched, reasons) = score_family("chien", None, &with_match, TriState::Unknown, &weights);
    let (unmatched, _) = score_family("chien", None, &without_match, TriState::Unknown, &weights);

    assert_eq!(matched, unmatched + 10); // +15 match vs +5 other species
    assert!(reasons.contains(&"recent experience with chien".to_string()));
}

#[test]
fn test_non_active_families_never_appear() {
    let ranker = MatchRanker::with_default_weights();
    let families = vec![
        // Suspended family with a perfect profile
        family(1, "Durand", FamilyStatus::Suspended, TriState::True, vec![]),
        family(2, "Petit", FamilyStatus::Terminated, TriState::True, vec![]),
        // Active family with a heavy load
        family(
            3,
            "Martin",
            FamilyStatus::Active,
            TriState::False,
            vec![placement(None, "Chien"), placement(None, "Chat")],
        ),
    ];

    let result = ranker.rank("Chien", None, &families, date("2024-06-01"));
    let ids: Vec<i64> = result.matches.iter().map(|m| m.family_id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn test_scores_are_never_negative() {
    let ranker = MatchRanker::with_default_weights();
    let overloaded = family(
        1,
        "Martin",
        FamilyStatus::Active,
        TriState::False,
        vec![
            placement(None, "Chien"),
            placement(None, "Chien"),
            placement(None, "Chat"),
            placement(None, "Chat"),
            placement(None, "Lapin"),
        ],
    );
    let assessment = BehaviorAssessment {
        dog_ok: TriState::False,
        cat_ok: TriState::False,
        child_ok: TriState::Unknown,
        score: Some(2),
        assessed_on: date("2024-05-01"),
    };

    let result = ranker.rank(
        "Perroquet",
        Some(&assessment),
        &[overloaded],
        date("2024-06-01"),
    );
    assert_eq!(result.matches[0].score, 0);
}

#[test]
fn test_determinism_across_calls() {
    let ranker = MatchRanker::with_default_weights();
    let assessment = BehaviorAssessment {
        dog_ok: TriState::False,
        cat_ok: TriState::Unknown,
        child_ok: TriState::True,
        score: Some(7),
        assessed_on: date("2024-05-10"),
    };
    let families = vec![
        family(
            1,
            "Martin",
            FamilyStatus::Active,
            TriState::True,
            vec![placement(Some("2024-09-01"), "Chat"), placement(None, "Chien")],
        ),
        family(2, "Durand", FamilyStatus::Active, TriState::Unknown, vec![]),
        family(
            3,
            "Petit",
            FamilyStatus::Active,
            TriState::False,
            vec![placement(Some("2024-06-15"), "Lapin")],
        ),
    ];

    let first = ranker.rank("Chien", Some(&assessment), &families, date("2024-06-01"));
    let second = ranker.rank("Chien", Some(&assessment), &families, date("2024-06-01"));

    let flatten = |matches: &[shelter_match::FamilyMatch]| {
        matches
            .iter()
            .map(|m| (m.family_id, m.score, m.reasons.clone(), m.available_at))
            .collect::<Vec<_>>()
    };
    assert_eq!(flatten(&first.matches), flatten(&second.matches));
}

// Scenario from the matching rules: Rex, a dog with no behavior note.
// F1 hosts a dog until July and has a garden; F2 is empty.
#[test]
fn test_scenario_rex_ranking() {
    let ranker = MatchRanker::with_default_weights();
    let families = vec![
        family(
            1,
            "F1",
            FamilyStatus::Active,
            TriState::True,
            vec![placement(Some("2024-07-01"), "Chien")],
        ),
        family(2, "F2", FamilyStatus::Active, TriState::False, vec![]),
    ];

    let result = ranker.rank("Chien", None, &families, date("2024-06-01"));

    assert_eq!(result.matches.len(), 2);

    // F2 first: 50 + 30 immediate + 10 empty slate = 90
    let f2 = &result.matches[0];
    assert_eq!(f2.family_id, 2);
    assert_eq!(f2.score, 90);
    assert!(f2.reasons.contains(&"available immediately".to_string()));

    // F1 second: 50 - 15 + 15 species + 5 garden = 55
    let f1 = &result.matches[1];
    assert_eq!(f1.family_id, 1);
    assert_eq!(f1.score, 55);
    assert!(f1.reasons.contains(&"available after 2024-07-01".to_string()));
    assert!(f1.reasons.contains(&"recent experience with chien".to_string()));
    assert_eq!(f1.available_at, Some(date("2024-07-01")));
}

// Scenario: a cat-incompatible cat arriving at a family already hosting a
// cat. The family is penalized but still listed.
#[test]
fn test_scenario_cat_conflict_still_listed() {
    let ranker = MatchRanker::with_default_weights();
    let assessment = BehaviorAssessment {
        dog_ok: TriState::Unknown,
        cat_ok: TriState::False,
        child_ok: TriState::Unknown,
        score: None,
        assessed_on: date("2024-05-20"),
    };
    let families = vec![family(
        1,
        "Martin",
        FamilyStatus::Active,
        TriState::Unknown,
        vec![placement(None, "Chat")],
    )];

    let result = ranker.rank("Chat", Some(&assessment), &families, date("2024-06-01"));

    assert_eq!(result.matches.len(), 1);
    let record = &result.matches[0];
    assert!(record
        .reasons
        .contains(&"not compatible with cats, family already hosts a cat".to_string()));
    // 50 - 15 + 15 species - 25 conflict = 25
    assert_eq!(record.score, 25);
}

#[test]
fn test_missing_assessment_vs_unknown_flags() {
    let snapshot = availability_snapshot(&[placement(None, "Chien")], date("2024-06-01"));
    let weights = ScoringWeights::default();
    let unknown_flags = BehaviorAssessment {
        dog_ok: TriState::Unknown,
        cat_ok: TriState::Unknown,
        child_ok: TriState::Unknown,
        score: None,
        assessed_on: date("2024-05-01"),
    };

    let (score_with_note, reasons_with_note) = score_family(
        "Chat",
        Some(&unknown_flags),
        &snapshot,
        TriState::Unknown,
        &weights,
    );
    let (score_without_note, reasons_without_note) =
        score_family("Chat", None, &snapshot, TriState::Unknown, &weights);

    // Same score either way, but only the missing note adds its reason
    assert_eq!(score_with_note, score_without_note);
    assert!(!reasons_with_note.contains(&"no recent behavior note".to_string()));
    assert!(reasons_without_note.contains(&"no recent behavior note".to_string()));
}

#[test]
fn test_reason_order_is_generation_order() {
    let families = vec![family(
        1,
        "Martin",
        FamilyStatus::Active,
        TriState::True,
        vec![placement(Some("2024-07-01"), "Chien")],
    )];
    let ranker = MatchRanker::with_default_weights();

    let result = ranker.rank("Chien", None, &families, date("2024-06-01"));
    let reasons = &result.matches[0].reasons;

    assert_eq!(
        reasons,
        &vec![
            "available after 2024-07-01".to_string(),
            "recent experience with chien".to_string(),
            "no recent behavior note".to_string(),
            "has a garden".to_string(),
        ]
    );
}
