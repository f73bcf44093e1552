use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    AnimalStatus, AnimalSummary, AvailableAnimal, BehaviorAssessment, FamilyStatus, FosterFamily,
    PersonContact, PlacementSummary, TriState,
};

/// Errors that can occur when interacting with the shelter database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Unexpected {column} value: {value}")]
    UnknownEnum { column: &'static str, value: String },
}

/// Ordering of the family listing. Matching wants the person-name order (it
/// fixes tie order between equal scores); the listing screen wants most
/// recently approved first.
#[derive(Debug, Clone, Copy)]
pub enum FamilyOrder {
    NameAsc,
    ApprovalDesc,
}

/// Read-only store over the shelter's relational data
///
/// All queries here are reads; the matching engine never writes. Mutations
/// happen in the surrounding case-management flows, outside this service.
pub struct ShelterStore {
    pool: PgPool,
}

impl ShelterStore {
    /// Connect and run pending migrations.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to Postgres");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch an animal with its species label. `None` when the id does not
    /// resolve.
    pub async fn fetch_animal(&self, animal_id: i64) -> Result<Option<AnimalSummary>, StoreError> {
        let query = r#"
            SELECT a.id, a.name, a.status, a.species_id, s.label
            FROM animals a
            JOIN species s ON s.id = a.species_id
            WHERE a.id = $1
        "#;

        let row = sqlx::query(query)
            .bind(animal_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            let status: String = row.get("status");
            Ok(AnimalSummary {
                id: row.get("id"),
                name: row.get("name"),
                status: parse_animal_status(&status)?,
                species_id: row.get("species_id"),
                species_label: row.get("label"),
            })
        })
        .transpose()
    }

    /// Latest behavior assessment for an animal: most recent date first, id
    /// as the tie-break.
    pub async fn fetch_latest_assessment(
        &self,
        animal_id: i64,
    ) -> Result<Option<BehaviorAssessment>, StoreError> {
        let query = r#"
            SELECT dog_ok, cat_ok, child_ok, score, assessed_on
            FROM behavior_assessments
            WHERE animal_id = $1
            ORDER BY assessed_on DESC, id DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(animal_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| BehaviorAssessment {
            dog_ok: TriState::from_db(row.get("dog_ok")),
            cat_ok: TriState::from_db(row.get("cat_ok")),
            child_ok: TriState::from_db(row.get("child_ok")),
            score: row.get("score"),
            assessed_on: row.get("assessed_on"),
        }))
    }

    /// All foster families with person contact and full placement history
    /// (each placement carrying its end date and hosted species label).
    pub async fn fetch_families_with_placements(
        &self,
        order: FamilyOrder,
    ) -> Result<Vec<FosterFamily>, StoreError> {
        let order_clause = match order {
            FamilyOrder::NameAsc => "ORDER BY p.last_name ASC, p.first_name ASC",
            FamilyOrder::ApprovalDesc => "ORDER BY f.approved_on DESC, f.id DESC",
        };

        let family_query = format!(
            r#"
            SELECT f.id, f.person_id, f.approved_on, f.status, f.notes,
                   p.last_name, p.first_name, p.email, p.phone, p.city, p.country, p.garden
            FROM foster_families f
            JOIN persons p ON p.id = f.person_id
            {order_clause}
        "#
        );

        let family_rows = sqlx::query(&family_query).fetch_all(&self.pool).await?;

        // Placements are ordered so the per-family species sets come out in a
        // fixed order for a given dataset.
        let placement_query = r#"
            SELECT pl.family_id, pl.end_date, s.label
            FROM placements pl
            JOIN animals a ON a.id = pl.animal_id
            LEFT JOIN species s ON s.id = a.species_id
            ORDER BY pl.family_id ASC, pl.start_date ASC, pl.id ASC
        "#;

        let placement_rows = sqlx::query(placement_query).fetch_all(&self.pool).await?;

        let mut placements_by_family: HashMap<i64, Vec<PlacementSummary>> = HashMap::new();
        for row in &placement_rows {
            let family_id: i64 = row.get("family_id");
            placements_by_family
                .entry(family_id)
                .or_default()
                .push(PlacementSummary {
                    end_date: row.get("end_date"),
                    species_label: row.get("label"),
                });
        }

        family_rows
            .iter()
            .map(|row| {
                let id: i64 = row.get("id");
                let status: String = row.get("status");
                Ok(FosterFamily {
                    id,
                    person_id: row.get("person_id"),
                    approved_on: row.get("approved_on"),
                    status: parse_family_status(&status)?,
                    notes: row.get("notes"),
                    contact: PersonContact {
                        last_name: row.get("last_name"),
                        first_name: row.get("first_name"),
                        email: row.get("email"),
                        phone: row.get("phone"),
                        city: row.get("city"),
                        country: row.get("country"),
                        garden: TriState::from_db(row.get("garden")),
                    },
                    placements: placements_by_family.remove(&id).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Animals with no active placement at the reference date, most recent
    /// arrivals first.
    pub async fn list_available_animals(
        &self,
        reference: NaiveDate,
    ) -> Result<Vec<AvailableAnimal>, StoreError> {
        let query = r#"
            SELECT a.id, a.name, a.status, a.arrived_on, s.label
            FROM animals a
            LEFT JOIN species s ON s.id = a.species_id
            WHERE NOT EXISTS (
                SELECT 1
                FROM placements pl
                WHERE pl.animal_id = a.id
                  AND (pl.end_date IS NULL OR pl.end_date >= $1)
            )
            ORDER BY a.arrived_on DESC
        "#;

        let rows = sqlx::query(query)
            .bind(reference)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                let status: String = row.get("status");
                Ok(AvailableAnimal {
                    id: row.get("id"),
                    name: row.get("name"),
                    status: parse_animal_status(&status)?,
                    arrived_on: row.get("arrived_on"),
                    species_label: row.get("label"),
                })
            })
            .collect()
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn parse_animal_status(value: &str) -> Result<AnimalStatus, StoreError> {
    AnimalStatus::parse(value).ok_or_else(|| StoreError::UnknownEnum {
        column: "animals.status",
        value: value.to_string(),
    })
}

fn parse_family_status(value: &str) -> Result<FamilyStatus, StoreError> {
    FamilyStatus::parse(value).ok_or_else(|| StoreError::UnknownEnum {
        column: "foster_families.status",
        value: value.to_string(),
    })
}
