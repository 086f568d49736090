//! Create/edit forms. Re-rendered with the submitted values when
//! validation fails.

use cosmos_core::roles::ALL_ROLES;
use cosmos_db::models::galaxy::GalaxyOption;

use super::{attr, esc, flash, layout, Nav};
use crate::forms::{GalaxyForm, PlanetForm, UserForm};

/// Heading, target and cancel link shared by every form page.
#[derive(Debug, Clone)]
pub struct FormPage<'a> {
    pub title: &'a str,
    pub action: String,
    pub cancel: &'a str,
    pub error: Option<&'a str>,
}

pub fn planet_form(
    admin: &str,
    page: &FormPage<'_>,
    values: &PlanetForm,
    galaxies: &[GalaxyOption],
) -> String {
    let selected_galaxy = values.galaxy_id.trim();
    let options: String = galaxies
        .iter()
        .map(|g| {
            let id = g.id.to_string();
            let selected = if id == selected_galaxy { " selected" } else { "" };
            format!(r#"<option value="{id}"{selected}>{}</option>"#, esc(&g.name))
        })
        .collect();

    let fields = format!(
        r#"<label>Name<input type="text" name="name" value="{name}" required></label>
<label>Type<input type="text" name="type" value="{kind}" required></label>
<label>Description<textarea name="description" rows="4" required>{description}</textarea></label>
<label>Diameter (km)<input type="text" name="diameter_km" value="{diameter}"></label>
<label>Mass (kg)<input type="text" name="mass_kg" value="{mass}"></label>
<label>Orbital period (days)<input type="text" name="orbital_period_days" value="{orbit}"></label>
<label>Discovery year<input type="text" name="discovered_year" value="{year}"></label>
<label>Galaxy<select name="galaxy_id"><option value="">None</option>{options}</select></label>
<label><input type="checkbox" name="has_life"{life}> Has life</label>
<label><input type="checkbox" name="is_habitable"{habitable}> Habitable</label>"#,
        name = attr(&values.name),
        kind = attr(&values.kind),
        description = esc(&values.description),
        diameter = attr(&values.diameter_km),
        mass = attr(&values.mass_kg),
        orbit = attr(&values.orbital_period_days),
        year = attr(&values.discovered_year),
        life = checked(values.has_life.as_deref()),
        habitable = checked(values.is_habitable.as_deref()),
    );
    render(admin, page, &fields)
}

pub fn galaxy_form(admin: &str, page: &FormPage<'_>, values: &GalaxyForm) -> String {
    let fields = format!(
        r#"<label>Name<input type="text" name="name" value="{name}" required></label>
<label>Type<input type="text" name="type" value="{kind}" required></label>
<label>Description<textarea name="description" rows="4" required>{description}</textarea></label>
<label>Diameter (light years)<input type="text" name="diameter_ly" value="{diameter}"></label>
<label>Mass (solar masses)<input type="text" name="mass_suns" value="{mass}"></label>
<label>Distance from Earth (light years)<input type="text" name="distance_from_earth_ly" value="{distance}"></label>
<label>Discovery year<input type="text" name="discovered_year" value="{year}"></label>"#,
        name = attr(&values.name),
        kind = attr(&values.kind),
        description = esc(&values.description),
        diameter = attr(&values.diameter_ly),
        mass = attr(&values.mass_suns),
        distance = attr(&values.distance_from_earth_ly),
        year = attr(&values.discovered_year),
    );
    render(admin, page, &fields)
}

/// `editing` makes the password optional ("leave blank to keep").
pub fn user_form(admin: &str, page: &FormPage<'_>, values: &UserForm, editing: bool) -> String {
    let roles: String = ALL_ROLES
        .iter()
        .map(|role| {
            let selected = if values.role == *role { " selected" } else { "" };
            format!(r#"<option value="{role}"{selected}>{role}</option>"#)
        })
        .collect();
    let password_label = if editing {
        "New password (leave blank to keep the current one)"
    } else {
        "Password"
    };
    let password_required = if editing { "" } else { " required" };

    let fields = format!(
        r#"<label>Username<input type="text" name="username" value="{username}" required></label>
<label>Email<input type="email" name="email" value="{email}" required></label>
<label>{password_label}<input type="password" name="password" minlength="6"{password_required} autocomplete="new-password"></label>
<label>Role<select name="role">{roles}</select></label>"#,
        username = attr(&values.username),
        email = attr(&values.email),
    );
    render(admin, page, &fields)
}

fn render(admin: &str, page: &FormPage<'_>, fields: &str) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
{error}
<form class="stacked" method="POST" action="{action}">
{fields}
<button type="submit">Save</button>
<a class="button" href="{cancel}">Cancel</a>
</form>"#,
        title = esc(page.title),
        error = flash(None, page.error),
        action = attr(&page.action),
        cancel = attr(page.cancel),
    );
    layout(page.title, Nav::Admin(admin), &body)
}

fn checked(raw: Option<&str>) -> &'static str {
    if cosmos_core::validation::parse_checkbox(raw) {
        " checked"
    } else {
        ""
    }
}
