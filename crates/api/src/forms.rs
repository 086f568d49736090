//! Raw HTML form submissions.
//!
//! Every field arrives as text and defaults to empty when absent, so a
//! missing field becomes a validation message instead of a 422 from the
//! extractor. `parse` turns a submission into the typed repository DTO;
//! `from_*` pre-fills an edit form from a stored row.

use cosmos_core::error::CoreError;
use cosmos_core::validation::{
    parse_checkbox, parse_f64_or_zero, parse_optional_f64, parse_optional_i32, parse_optional_id,
};
use cosmos_db::models::galaxy::{Galaxy, GalaxyInput};
use cosmos_db::models::planet::{Planet, PlanetInput};
use cosmos_db::models::user::User;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlanetForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub diameter_km: String,
    pub mass_kg: String,
    pub orbital_period_days: String,
    pub discovered_year: String,
    pub galaxy_id: String,
    pub has_life: Option<String>,
    pub is_habitable: Option<String>,
}

impl PlanetForm {
    pub fn parse(&self) -> Result<PlanetInput, CoreError> {
        Ok(PlanetInput {
            name: self.name.trim().to_string(),
            kind: self.kind.trim().to_string(),
            description: self.description.trim().to_string(),
            diameter_km: parse_f64_or_zero("Diameter", &self.diameter_km)?,
            mass_kg: parse_f64_or_zero("Mass", &self.mass_kg)?,
            orbital_period_days: parse_f64_or_zero("Orbital period", &self.orbital_period_days)?,
            discovered_year: parse_optional_i32("Discovery year", &self.discovered_year)?,
            galaxy_id: parse_optional_id("Galaxy", &self.galaxy_id)?,
            has_life: parse_checkbox(self.has_life.as_deref()),
            is_habitable: parse_checkbox(self.is_habitable.as_deref()),
        })
    }

    pub fn from_planet(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            kind: planet.kind.clone(),
            description: planet.description.clone(),
            diameter_km: planet.diameter_km.to_string(),
            mass_kg: planet.mass_kg.to_string(),
            orbital_period_days: planet.orbital_period_days.to_string(),
            discovered_year: optional_text(planet.discovered_year),
            galaxy_id: optional_text(planet.galaxy_id),
            has_life: planet.has_life.then(|| "on".to_string()),
            is_habitable: planet.is_habitable.then(|| "on".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalaxyForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub diameter_ly: String,
    pub mass_suns: String,
    pub distance_from_earth_ly: String,
    pub discovered_year: String,
}

impl GalaxyForm {
    pub fn parse(&self) -> Result<GalaxyInput, CoreError> {
        Ok(GalaxyInput {
            name: self.name.trim().to_string(),
            kind: self.kind.trim().to_string(),
            description: self.description.trim().to_string(),
            diameter_ly: parse_optional_f64("Diameter", &self.diameter_ly)?,
            mass_suns: parse_optional_f64("Mass", &self.mass_suns)?,
            distance_from_earth_ly: parse_optional_f64(
                "Distance from Earth",
                &self.distance_from_earth_ly,
            )?,
            discovered_year: parse_optional_i32("Discovery year", &self.discovered_year)?,
        })
    }

    pub fn from_galaxy(galaxy: &Galaxy) -> Self {
        Self {
            name: galaxy.name.clone(),
            kind: galaxy.kind.clone(),
            description: galaxy.description.clone(),
            diameter_ly: optional_text(galaxy.diameter_ly),
            mass_suns: optional_text(galaxy.mass_suns),
            distance_from_earth_ly: optional_text(galaxy.distance_from_earth_ly),
            discovered_year: optional_text(galaxy.discovered_year),
        }
    }
}

/// Account form. The password is never echoed back into the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `?success=` message carried across a redirect.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlashQuery {
    pub success: Option<String>,
}

fn optional_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn mars() -> PlanetForm {
        PlanetForm {
            name: " Mars ".into(),
            kind: "terrestrial".into(),
            description: "The red planet".into(),
            diameter_km: "6779".into(),
            mass_kg: "6.39e23".into(),
            orbital_period_days: "".into(),
            discovered_year: "".into(),
            galaxy_id: "2".into(),
            has_life: None,
            is_habitable: Some("on".into()),
        }
    }

    #[test]
    fn planet_form_parses_typed_values() {
        let input = mars().parse().unwrap();
        assert_eq!(input.name, "Mars");
        assert_eq!(input.diameter_km, 6779.0);
        assert_eq!(input.orbital_period_days, 0.0);
        assert_eq!(input.discovered_year, None);
        assert_eq!(input.galaxy_id, Some(2));
        assert!(!input.has_life);
        assert!(input.is_habitable);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let form = PlanetForm {
            mass_kg: "very heavy".into(),
            ..mars()
        };
        assert_matches!(form.parse(), Err(CoreError::Validation(msg)) if msg.contains("Mass"));
    }

    #[test]
    fn galaxy_optionals_stay_absent() {
        let form = GalaxyForm {
            name: "Andromeda".into(),
            kind: "spiral".into(),
            description: "Nearest large neighbour".into(),
            distance_from_earth_ly: "2537000".into(),
            ..Default::default()
        };
        let input = form.parse().unwrap();
        assert_eq!(input.diameter_ly, None);
        assert_eq!(input.mass_suns, None);
        assert_eq!(input.distance_from_earth_ly, Some(2_537_000.0));
    }

    #[test]
    fn galaxy_discovery_year_is_parsed() {
        let form = GalaxyForm {
            name: "Triangulum".into(),
            kind: "spiral".into(),
            description: "M33".into(),
            discovered_year: "1654".into(),
            ..Default::default()
        };
        let input = form.parse().unwrap();
        assert_eq!(input.discovered_year, Some(1654));
        assert!(input.validate().is_ok());
    }
}
