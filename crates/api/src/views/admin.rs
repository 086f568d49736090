//! Admin area pages: login, dashboard, tables and delete confirmations.

use cosmos_core::roles::PROTECTED_USER_ID;
use cosmos_core::types::DbId;
use cosmos_db::models::galaxy::Galaxy;
use cosmos_db::models::planet::Planet;
use cosmos_db::models::user::UserResponse;

use super::{attr, esc, flash, layout, or_dash, yes_no, Nav};

pub fn login(username: &str, error: Option<&str>) -> String {
    let body = format!(
        r#"<section class="card login">
  <h1>Cosmos admin</h1>
  {error_html}
  <form class="stacked" method="POST" action="/admin/login">
    <label>Username<input type="text" name="username" value="{username}" required autocomplete="username"></label>
    <label>Password<input type="password" name="password" required autocomplete="current-password"></label>
    <button type="submit">Log in</button>
  </form>
</section>"#,
        error_html = flash(None, error),
        username = attr(username),
    );
    layout("Log in", Nav::Bare, &body)
}

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardStats {
    pub planets: i64,
    pub galaxies: i64,
    pub users: i64,
    pub admins: i64,
}

pub fn dashboard(admin: &str, stats: DashboardStats) -> String {
    let body = format!(
        r#"<h1>Welcome, {name}</h1>
<div class="cards">
  <a class="card" href="/admin/planets"><div class="value">{planets}</div><div>Planets</div></a>
  <a class="card" href="/admin/galaxies"><div class="value">{galaxies}</div><div>Galaxies</div></a>
  <a class="card" href="/admin/users"><div class="value">{users}</div><div>Users</div></a>
  <div class="card"><div class="value">{admins}</div><div>Administrators</div></div>
</div>"#,
        name = esc(admin),
        planets = stats.planets,
        galaxies = stats.galaxies,
        users = stats.users,
        admins = stats.admins,
    );
    layout("Dashboard", Nav::Admin(admin), &body)
}

pub fn planet_table(admin: &str, planets: &[Planet], success: Option<&str>) -> String {
    let rows: String = planets
        .iter()
        .map(|p| {
            format!(
                r#"<tr><td>{id}</td><td>{name}</td><td>{kind}</td><td>{galaxy}</td><td>{habitable}</td><td>{actions}</td></tr>"#,
                id = p.id,
                name = esc(&p.name),
                kind = esc(&p.kind),
                galaxy = esc(p.galaxy_name.as_deref().unwrap_or("-")),
                habitable = yes_no(p.is_habitable),
                actions = row_actions("planets", p.id),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Planets</h1>
{flash}
<a class="button" href="/admin/planets/new">Add planet</a>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Type</th><th>Galaxy</th><th>Habitable</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
        flash = flash(success, None),
    );
    layout("Planets", Nav::Admin(admin), &body)
}

pub fn galaxy_table(admin: &str, galaxies: &[Galaxy], success: Option<&str>) -> String {
    let rows: String = galaxies
        .iter()
        .map(|g| {
            format!(
                r#"<tr><td>{id}</td><td>{name}</td><td>{kind}</td><td>{year}</td><td>{actions}</td></tr>"#,
                id = g.id,
                name = esc(&g.name),
                kind = esc(&g.kind),
                year = or_dash(g.discovered_year),
                actions = row_actions("galaxies", g.id),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Galaxies</h1>
{flash}
<a class="button" href="/admin/galaxies/new">Add galaxy</a>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Type</th><th>Discovered</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
        flash = flash(success, None),
    );
    layout("Galaxies", Nav::Admin(admin), &body)
}

pub fn user_table(admin: &str, users: &[UserResponse], success: Option<&str>) -> String {
    let rows: String = users
        .iter()
        .map(|u| {
            let actions = if u.id == PROTECTED_USER_ID {
                format!(r#"<a href="/admin/users/{}/edit">Edit</a>"#, u.id)
            } else {
                row_actions("users", u.id)
            };
            format!(
                r#"<tr><td>{id}</td><td><a href="/admin/users/{id}">{name}</a></td><td>{email}</td><td>{role}</td><td>{created}</td><td>{actions}</td></tr>"#,
                id = u.id,
                name = esc(&u.username),
                email = esc(&u.email),
                role = esc(&u.role),
                created = u.created_at.format("%Y-%m-%d"),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Users</h1>
{flash}
<a class="button" href="/admin/users/new">Add user</a>
<table>
<thead><tr><th>ID</th><th>Username</th><th>Email</th><th>Role</th><th>Created</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
        flash = flash(success, None),
    );
    layout("Users", Nav::Admin(admin), &body)
}

pub fn user_detail(admin: &str, user: &UserResponse) -> String {
    let body = format!(
        r#"<h1>{name}</h1>
<dl>
  <dt>ID</dt><dd>{id}</dd>
  <dt>Email</dt><dd>{email}</dd>
  <dt>Role</dt><dd>{role}</dd>
  <dt>Created</dt><dd>{created}</dd>
</dl>
<a class="button" href="/admin/users/{id}/edit">Edit</a>
<p><a href="/admin/users">All users</a></p>"#,
        id = user.id,
        name = esc(&user.username),
        email = esc(&user.email),
        role = esc(&user.role),
        created = user.created_at.format("%Y-%m-%d %H:%M UTC"),
    );
    layout(&user.username, Nav::Admin(admin), &body)
}

/// What a delete confirmation page describes.
#[derive(Debug, Clone)]
pub struct ConfirmDelete<'a> {
    /// Singular entity label, e.g. "galaxy".
    pub entity: &'a str,
    pub name: &'a str,
    /// Path the confirmation form posts to.
    pub action: String,
    pub cancel: &'a str,
    /// Why the delete will be refused, shown instead of the button.
    pub blocked: Option<String>,
}

pub fn confirm_delete(admin: &str, confirm: &ConfirmDelete<'_>) -> String {
    let controls = match &confirm.blocked {
        Some(reason) => format!(
            r#"{flash}<a class="button" href="{cancel}">Back</a>"#,
            flash = flash(None, Some(reason)),
            cancel = attr(confirm.cancel),
        ),
        None => format!(
            r#"<form method="POST" action="{action}">
  <button class="danger" type="submit">Delete</button>
  <a class="button" href="{cancel}">Cancel</a>
</form>"#,
            action = attr(&confirm.action),
            cancel = attr(confirm.cancel),
        ),
    };

    let body = format!(
        r#"<h1>Delete {entity}</h1>
<p>Are you sure you want to delete the {entity} <strong>{name}</strong>? This cannot be undone.</p>
{controls}"#,
        entity = esc(confirm.entity),
        name = esc(confirm.name),
    );
    layout("Confirm delete", Nav::Admin(admin), &body)
}

fn row_actions(collection: &str, id: DbId) -> String {
    format!(
        r#"<a href="/admin/{collection}/{id}/edit">Edit</a> <a href="/admin/{collection}/{id}/delete">Delete</a>"#
    )
}
