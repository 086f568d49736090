//! Repository for the `galaxies` table.

use cosmos_core::types::DbId;
use sqlx::PgPool;

use crate::models::galaxy::{Galaxy, GalaxyInput, GalaxyOption};
use crate::error::RepoError;
use crate::models::DeleteOutcome;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, type, description, diameter_ly, mass_suns, \
                       distance_from_earth_ly, discovered_year, created_at, updated_at";

/// Provides CRUD operations for galaxies.
pub struct GalaxyRepo;

impl GalaxyRepo {
    /// Validate and insert a new galaxy, returning the created row.
    pub async fn create(pool: &PgPool, input: &GalaxyInput) -> Result<Galaxy, RepoError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO galaxies (name, type, description, diameter_ly, mass_suns,
                                   distance_from_earth_ly, discovered_year)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let galaxy = sqlx::query_as::<_, Galaxy>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(input.diameter_ly)
            .bind(input.mass_suns)
            .bind(input.distance_from_earth_ly)
            .bind(input.discovered_year)
            .fetch_one(pool)
            .await?;
        Ok(galaxy)
    }

    /// Find a galaxy by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Galaxy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galaxies WHERE id = $1");
        sqlx::query_as::<_, Galaxy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a galaxy with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM galaxies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all galaxies alphabetically (public catalog order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Galaxy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galaxies ORDER BY name, id");
        sqlx::query_as::<_, Galaxy>(&query).fetch_all(pool).await
    }

    /// List all galaxies newest first (admin order).
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<Galaxy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galaxies ORDER BY id DESC");
        sqlx::query_as::<_, Galaxy>(&query).fetch_all(pool).await
    }

    /// Id/name pairs ordered by name, for select inputs.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<GalaxyOption>, sqlx::Error> {
        sqlx::query_as::<_, GalaxyOption>("SELECT id, name FROM galaxies ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM galaxies")
            .fetch_one(pool)
            .await
    }

    /// Number of planets that reference this galaxy.
    pub async fn count_planets(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM planets WHERE galaxy_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field of a galaxy.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &GalaxyInput,
    ) -> Result<Option<Galaxy>, RepoError> {
        input.validate()?;
        let query = format!(
            "UPDATE galaxies SET
                name = $2,
                type = $3,
                description = $4,
                diameter_ly = $5,
                mass_suns = $6,
                distance_from_earth_ly = $7,
                discovered_year = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let galaxy = sqlx::query_as::<_, Galaxy>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(input.diameter_ly)
            .bind(input.mass_suns)
            .bind(input.distance_from_earth_ly)
            .bind(input.discovered_year)
            .fetch_optional(pool)
            .await?;
        Ok(galaxy)
    }

    /// Delete a galaxy unless planets still reference it.
    ///
    /// The dependent count and the delete are separate statements, so a planet
    /// inserted in between is caught only by `fk_planets_galaxy_id`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let dependents = Self::count_planets(pool, id).await?;
        if dependents > 0 {
            return Ok(DeleteOutcome::HasDependents {
                count: dependents,
                dependent: "planet",
            });
        }

        let result = sqlx::query("DELETE FROM galaxies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
