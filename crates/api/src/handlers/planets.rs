//! Admin planet management.

use axum::extract::{Query, State};
use axum::response::{Html, Response};
use axum::Form;
use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;
use cosmos_db::models::planet::{Planet, PlanetInput};
use cosmos_db::repositories::{GalaxyRepo, PlanetRepo};

use super::{EntityId, redirect_with_success, rejected_form, validation_message};
use crate::error::AppResult;
use crate::forms::{FlashQuery, PlanetForm};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;
use crate::views;
use crate::views::admin::ConfirmDelete;
use crate::views::forms::FormPage;

const LIST_PATH: &str = "/admin/planets";

/// GET /admin/planets
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(flash): Query<FlashQuery>,
) -> AppResult<Html<String>> {
    let planets = PlanetRepo::list_recent(&state.pool).await?;
    Ok(Html(views::admin::planet_table(
        &admin.username,
        &planets,
        flash.success.as_deref(),
    )))
}

/// GET /admin/planets/new
pub async fn new_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Html<String>> {
    let html = render_form(&state, &admin, new_page(None), &PlanetForm::default()).await?;
    Ok(Html(html))
}

/// POST /admin/planets/new
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<PlanetForm>,
) -> AppResult<Response> {
    let input = match validated_input(&state, &form).await {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = new_page(Some(message.as_str()));
            let html = render_form(&state, &admin, page, &form).await?;
            return Ok(rejected_form(html));
        }
    };

    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, admin_id = admin.user_id, "Planet created");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Planet '{}' created", planet.name),
    ))
}

/// GET /admin/planets/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let planet = find(&state, id).await?;
    let html = render_form(
        &state,
        &admin,
        edit_page(id, None),
        &PlanetForm::from_planet(&planet),
    )
    .await?;
    Ok(Html(html))
}

/// POST /admin/planets/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
    Form(form): Form<PlanetForm>,
) -> AppResult<Response> {
    // Unknown ids are a 404 even when the submission is also invalid.
    find(&state, id).await?;

    let input = match validated_input(&state, &form).await {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = edit_page(id, Some(message.as_str()));
            let html = render_form(&state, &admin, page, &form).await?;
            return Ok(rejected_form(html));
        }
    };

    let planet = PlanetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Planet",
            id,
        })?;
    tracing::info!(planet_id = planet.id, admin_id = admin.user_id, "Planet updated");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Planet '{}' updated", planet.name),
    ))
}

/// GET /admin/planets/{id}/delete
pub async fn confirm_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let planet = find(&state, id).await?;
    let confirm = ConfirmDelete {
        entity: "planet",
        name: &planet.name,
        action: format!("{LIST_PATH}/{id}/delete"),
        cancel: LIST_PATH,
        blocked: None,
    };
    Ok(Html(views::admin::confirm_delete(&admin.username, &confirm)))
}

/// POST /admin/planets/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Response> {
    let planet = find(&state, id).await?;
    PlanetRepo::delete(&state.pool, id)
        .await?
        .into_result("Planet", id)?;

    tracing::info!(planet_id = id, admin_id = admin.user_id, "Planet deleted");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Planet '{}' deleted", planet.name),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find(state: &AppState, id: DbId) -> AppResult<Planet> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Planet",
            id,
        })?;
    Ok(planet)
}

/// Parse and validate a submission, including that the chosen galaxy exists.
async fn validated_input(state: &AppState, form: &PlanetForm) -> AppResult<PlanetInput> {
    let input = form.parse()?;
    input.validate()?;
    if let Some(galaxy_id) = input.galaxy_id {
        if !GalaxyRepo::exists(&state.pool, galaxy_id).await? {
            return Err(CoreError::Validation("Selected galaxy does not exist".into()).into());
        }
    }
    Ok(input)
}

async fn render_form(
    state: &AppState,
    admin: &AuthUser,
    page: FormPage<'_>,
    values: &PlanetForm,
) -> AppResult<String> {
    let galaxies = GalaxyRepo::list_options(&state.pool).await?;
    Ok(views::forms::planet_form(
        &admin.username,
        &page,
        values,
        &galaxies,
    ))
}

fn new_page(error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "New planet",
        action: format!("{LIST_PATH}/new"),
        cancel: LIST_PATH,
        error,
    }
}

fn edit_page(id: DbId, error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "Edit planet",
        action: format!("{LIST_PATH}/{id}/edit"),
        cancel: LIST_PATH,
        error,
    }
}
