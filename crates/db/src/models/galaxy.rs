//! Galaxy entity model and DTOs.

use cosmos_core::error::CoreError;
use cosmos_core::types::{DbId, Timestamp};
use cosmos_core::validation::require_text;
use serde::Serialize;
use sqlx::FromRow;

/// A galaxy row from the `galaxies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Galaxy {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub diameter_ly: Option<f64>,
    pub mass_suns: Option<f64>,
    pub distance_from_earth_ly: Option<f64>,
    pub discovered_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Id and name only, for the galaxy picker on the planet form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalaxyOption {
    pub id: DbId,
    pub name: String,
}

/// Every editable galaxy field. Used for both create and full update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalaxyInput {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub diameter_ly: Option<f64>,
    pub mass_suns: Option<f64>,
    pub distance_from_earth_ly: Option<f64>,
    pub discovered_year: Option<i32>,
}

impl GalaxyInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("Galaxy name", &self.name)?;
        require_text("Galaxy type", &self.kind)?;
        require_text("Description", &self.description)?;
        Ok(())
    }
}

impl From<&Galaxy> for GalaxyInput {
    fn from(galaxy: &Galaxy) -> Self {
        Self {
            name: galaxy.name.clone(),
            kind: galaxy.kind.clone(),
            description: galaxy.description.clone(),
            diameter_ly: galaxy.diameter_ly,
            mass_suns: galaxy.mass_suns,
            distance_from_earth_ly: galaxy.distance_from_earth_ly,
            discovered_year: galaxy.discovered_year,
        }
    }
}
