//! Public catalog pages. No authentication, read only.

use cosmos_core::formatting::{format_mass, format_number};
use cosmos_db::models::galaxy::Galaxy;
use cosmos_db::models::planet::Planet;

use super::{esc, layout, or_dash, yes_no, Nav};

pub fn home(planet_count: i64, galaxy_count: i64) -> String {
    let body = format!(
        r#"<h1>Explore the cosmos</h1>
<p>A catalog of planets and the galaxies they belong to.</p>
<div class="cards">
  <a class="card" href="/planets"><div class="value">{planet_count}</div><div>Planets</div></a>
  <a class="card" href="/galaxies"><div class="value">{galaxy_count}</div><div>Galaxies</div></a>
</div>"#
    );
    layout("Home", Nav::Public, &body)
}

pub fn planet_list(planets: &[Planet]) -> String {
    let rows: String = planets
        .iter()
        .map(|p| {
            format!(
                r#"<tr><td><a href="/planets/{id}">{name}</a></td><td>{kind}</td><td>{galaxy}</td><td>{diameter} km</td></tr>"#,
                id = p.id,
                name = esc(&p.name),
                kind = esc(&p.kind),
                galaxy = esc(p.galaxy_name.as_deref().unwrap_or("-")),
                diameter = format_number(p.diameter_km),
            )
        })
        .collect();

    let body = if planets.is_empty() {
        "<h1>Planets</h1>\n<p>No planets have been catalogued yet.</p>".to_string()
    } else {
        format!(
            r#"<h1>Planets</h1>
<table>
<thead><tr><th>Name</th><th>Type</th><th>Galaxy</th><th>Diameter</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };
    layout("Planets", Nav::Public, &body)
}

pub fn planet_detail(planet: &Planet) -> String {
    let galaxy = match (planet.galaxy_id, planet.galaxy_name.as_deref()) {
        (Some(id), Some(name)) => format!(r#"<a href="/galaxies/{id}">{}</a>"#, esc(name)),
        _ => "-".to_string(),
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p>{description}</p>
<dl>
  <dt>Type</dt><dd>{kind}</dd>
  <dt>Galaxy</dt><dd>{galaxy}</dd>
  <dt>Diameter</dt><dd>{diameter} km</dd>
  <dt>Mass</dt><dd>{mass}</dd>
  <dt>Orbital period</dt><dd>{orbit} days</dd>
  <dt>Discovered</dt><dd>{year}</dd>
  <dt>Has life</dt><dd>{life}</dd>
  <dt>Habitable</dt><dd>{habitable}</dd>
</dl>
<p><a href="/planets">All planets</a></p>"#,
        name = esc(&planet.name),
        description = esc(&planet.description),
        kind = esc(&planet.kind),
        diameter = format_number(planet.diameter_km),
        mass = format_mass(planet.mass_kg),
        orbit = format_number(planet.orbital_period_days),
        year = or_dash(planet.discovered_year),
        life = yes_no(planet.has_life),
        habitable = yes_no(planet.is_habitable),
    );
    layout(&planet.name, Nav::Public, &body)
}

pub fn galaxy_list(galaxies: &[Galaxy]) -> String {
    let rows: String = galaxies
        .iter()
        .map(|g| {
            format!(
                r#"<tr><td><a href="/galaxies/{id}">{name}</a></td><td>{kind}</td><td>{distance}</td></tr>"#,
                id = g.id,
                name = esc(&g.name),
                kind = esc(&g.kind),
                distance = light_years(g.distance_from_earth_ly),
            )
        })
        .collect();

    let body = if galaxies.is_empty() {
        "<h1>Galaxies</h1>\n<p>No galaxies have been catalogued yet.</p>".to_string()
    } else {
        format!(
            r#"<h1>Galaxies</h1>
<table>
<thead><tr><th>Name</th><th>Type</th><th>Distance from Earth</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };
    layout("Galaxies", Nav::Public, &body)
}

pub fn galaxy_detail(galaxy: &Galaxy, planets: &[Planet]) -> String {
    let planet_items: String = planets
        .iter()
        .map(|p| format!(r#"<li><a href="/planets/{}">{}</a></li>"#, p.id, esc(&p.name)))
        .collect();
    let planets_html = if planets.is_empty() {
        "<p>No catalogued planets in this galaxy.</p>".to_string()
    } else {
        format!("<ul>{planet_items}</ul>")
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p>{description}</p>
<dl>
  <dt>Type</dt><dd>{kind}</dd>
  <dt>Diameter</dt><dd>{diameter}</dd>
  <dt>Mass</dt><dd>{mass}</dd>
  <dt>Distance from Earth</dt><dd>{distance}</dd>
  <dt>Discovered</dt><dd>{year}</dd>
</dl>
<h2>Planets</h2>
{planets_html}
<p><a href="/galaxies">All galaxies</a></p>"#,
        name = esc(&galaxy.name),
        description = esc(&galaxy.description),
        kind = esc(&galaxy.kind),
        diameter = light_years(galaxy.diameter_ly),
        mass = galaxy
            .mass_suns
            .map(|m| format!("{} solar masses", format_number(m)))
            .unwrap_or_else(|| "-".to_string()),
        distance = light_years(galaxy.distance_from_earth_ly),
        year = or_dash(galaxy.discovered_year),
    );
    layout(&galaxy.name, Nav::Public, &body)
}

fn light_years(value: Option<f64>) -> String {
    value
        .map(|v| format!("{} light years", format_number(v)))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn andromeda() -> Galaxy {
        Galaxy {
            id: 1,
            name: "Andromeda".into(),
            kind: "spiral".into(),
            description: "Nearest large neighbour".into(),
            diameter_ly: Some(220_000.0),
            mass_suns: None,
            distance_from_earth_ly: Some(2_537_000.0),
            discovered_year: Some(964),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn galaxy_detail_renders_unknowns_as_dash() {
        let html = galaxy_detail(&andromeda(), &[]);
        assert!(html.contains("<dt>Mass</dt><dd>-</dd>"));
        assert!(html.contains("2.5 million light years"));
        assert!(html.contains("No catalogued planets"));
    }

    #[test]
    fn stored_markup_is_escaped() {
        let galaxy = Galaxy {
            name: "<img src=x onerror=alert(1)>".into(),
            ..andromeda()
        };
        let html = galaxy_list(&[galaxy]);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }
}
