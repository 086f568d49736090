//! Repository for the `planets` table.
//!
//! Every read joins `galaxies` so the row carries the galaxy name. Writes
//! go through a CTE so the returned row is joined the same way.

use cosmos_core::types::DbId;
use sqlx::PgPool;

use crate::models::planet::{Planet, PlanetInput};
use crate::error::RepoError;
use crate::models::DeleteOutcome;

/// Column list over `planets p LEFT JOIN galaxies g`.
const COLUMNS: &str = "p.id, p.name, p.type, p.description, p.diameter_km, p.mass_kg, \
                       p.orbital_period_days, p.discovered_year, p.galaxy_id, \
                       g.name AS galaxy_name, p.has_life, p.is_habitable, \
                       p.created_at, p.updated_at";

const JOIN: &str = "LEFT JOIN galaxies g ON g.id = p.galaxy_id";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Validate and insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &PlanetInput) -> Result<Planet, RepoError> {
        input.validate()?;
        let query = format!(
            "WITH p AS (
                INSERT INTO planets (name, type, description, diameter_km, mass_kg,
                                     orbital_period_days, discovered_year, galaxy_id,
                                     has_life, is_habitable)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN}"
        );
        let planet = sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(input.diameter_km)
            .bind(input.mass_kg)
            .bind(input.orbital_period_days)
            .bind(input.discovered_year)
            .bind(input.galaxy_id)
            .bind(input.has_life)
            .bind(input.is_habitable)
            .fetch_one(pool)
            .await?;
        Ok(planet)
    }

    /// Find a planet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets p {JOIN} WHERE p.id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets alphabetically (public catalog order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets p {JOIN} ORDER BY p.name, p.id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// List all planets newest first (admin order).
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets p {JOIN} ORDER BY p.id DESC");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// List the planets of one galaxy alphabetically.
    pub async fn list_by_galaxy(pool: &PgPool, galaxy_id: DbId) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM planets p {JOIN} WHERE p.galaxy_id = $1 ORDER BY p.name, p.id"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(galaxy_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM planets")
            .fetch_one(pool)
            .await
    }

    /// Replace every editable field of a planet.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PlanetInput,
    ) -> Result<Option<Planet>, RepoError> {
        input.validate()?;
        let query = format!(
            "WITH p AS (
                UPDATE planets SET
                    name = $2,
                    type = $3,
                    description = $4,
                    diameter_km = $5,
                    mass_kg = $6,
                    orbital_period_days = $7,
                    discovered_year = $8,
                    galaxy_id = $9,
                    has_life = $10,
                    is_habitable = $11,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM p {JOIN}"
        );
        let planet = sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(input.diameter_km)
            .bind(input.mass_kg)
            .bind(input.orbital_period_days)
            .bind(input.discovered_year)
            .bind(input.galaxy_id)
            .bind(input.has_life)
            .bind(input.is_habitable)
            .fetch_optional(pool)
            .await?;
        Ok(planet)
    }

    /// Permanently delete a planet by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
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
