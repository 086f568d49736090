//! Planet entity model and DTOs.

use cosmos_core::error::CoreError;
use cosmos_core::types::{DbId, Timestamp};
use cosmos_core::validation::require_text;
use serde::Serialize;
use sqlx::FromRow;

/// A planet row joined with the name of its galaxy (if any).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub diameter_km: f64,
    pub mass_kg: f64,
    pub orbital_period_days: f64,
    pub discovered_year: Option<i32>,
    pub galaxy_id: Option<DbId>,
    pub galaxy_name: Option<String>,
    pub has_life: bool,
    pub is_habitable: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Every editable planet field. Used for both create and full update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetInput {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub diameter_km: f64,
    pub mass_kg: f64,
    pub orbital_period_days: f64,
    pub discovered_year: Option<i32>,
    pub galaxy_id: Option<DbId>,
    pub has_life: bool,
    pub is_habitable: bool,
}

impl PlanetInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Planet name", &self.name)?;
        require_text("Planet type", &self.kind)?;
        require_text("Description", &self.description)?;
        Ok(())
    }
}

impl From<&Planet> for PlanetInput {
    fn from(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            kind: planet.kind.clone(),
            description: planet.description.clone(),
            diameter_km: planet.diameter_km,
            mass_kg: planet.mass_kg,
            orbital_period_days: planet.orbital_period_days,
            discovered_year: planet.discovered_year,
            galaxy_id: planet.galaxy_id,
            has_life: planet.has_life,
            is_habitable: planet.is_habitable,
        }
    }
}
