//! Admin galaxy management.

use axum::extract::{Query, State};
use axum::response::{Html, Response};
use axum::Form;
use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;
use cosmos_db::models::galaxy::{Galaxy, GalaxyInput};
use cosmos_db::repositories::GalaxyRepo;

use super::{EntityId, redirect_with_success, rejected_form, validation_message};
use crate::error::AppResult;
use crate::forms::{FlashQuery, GalaxyForm};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;
use crate::views;
use crate::views::admin::ConfirmDelete;
use crate::views::forms::FormPage;

const LIST_PATH: &str = "/admin/galaxies";

/// GET /admin/galaxies
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(flash): Query<FlashQuery>,
) -> AppResult<Html<String>> {
    let galaxies = GalaxyRepo::list_recent(&state.pool).await?;
    Ok(Html(views::admin::galaxy_table(
        &admin.username,
        &galaxies,
        flash.success.as_deref(),
    )))
}

/// GET /admin/galaxies/new
pub async fn new_form(RequireAdmin(admin): RequireAdmin) -> Html<String> {
    Html(views::forms::galaxy_form(
        &admin.username,
        &new_page(None),
        &GalaxyForm::default(),
    ))
}

/// POST /admin/galaxies/new
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<GalaxyForm>,
) -> AppResult<Response> {
    let input = match validated_input(&form) {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = new_page(Some(message.as_str()));
            let html = views::forms::galaxy_form(&admin.username, &page, &form);
            return Ok(rejected_form(html));
        }
    };

    let galaxy = GalaxyRepo::create(&state.pool, &input).await?;
    tracing::info!(galaxy_id = galaxy.id, admin_id = admin.user_id, "Galaxy created");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Galaxy '{}' created", galaxy.name),
    ))
}

/// GET /admin/galaxies/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let galaxy = find(&state, id).await?;
    Ok(Html(views::forms::galaxy_form(
        &admin.username,
        &edit_page(id, None),
        &GalaxyForm::from_galaxy(&galaxy),
    )))
}

/// POST /admin/galaxies/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
    Form(form): Form<GalaxyForm>,
) -> AppResult<Response> {
    find(&state, id).await?;

    let input = match validated_input(&form) {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = edit_page(id, Some(message.as_str()));
            let html = views::forms::galaxy_form(&admin.username, &page, &form);
            return Ok(rejected_form(html));
        }
    };

    let galaxy = GalaxyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Galaxy",
            id,
        })?;
    tracing::info!(galaxy_id = galaxy.id, admin_id = admin.user_id, "Galaxy updated");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Galaxy '{}' updated", galaxy.name),
    ))
}

/// GET /admin/galaxies/{id}/delete
///
/// Shows how many planets still reference the galaxy; with any left the
/// page offers no delete button.
pub async fn confirm_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let galaxy = find(&state, id).await?;
    let dependents = GalaxyRepo::count_planets(&state.pool, id).await?;

    let confirm = ConfirmDelete {
        entity: "galaxy",
        name: &galaxy.name,
        action: format!("{LIST_PATH}/{id}/delete"),
        cancel: LIST_PATH,
        blocked: (dependents > 0).then(|| {
            format!(
                "This galaxy still has {dependents} planet(s). \
                 Move or delete them before deleting the galaxy."
            )
        }),
    };
    Ok(Html(views::admin::confirm_delete(&admin.username, &confirm)))
}

/// POST /admin/galaxies/{id}/delete
///
/// Refused with 409 while planets still reference the galaxy.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Response> {
    let galaxy = find(&state, id).await?;
    GalaxyRepo::delete(&state.pool, id)
        .await?
        .into_result("Galaxy", id)?;

    tracing::info!(galaxy_id = id, admin_id = admin.user_id, "Galaxy deleted");
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("Galaxy '{}' deleted", galaxy.name),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find(state: &AppState, id: DbId) -> AppResult<Galaxy> {
    let galaxy = GalaxyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Galaxy",
            id,
        })?;
    Ok(galaxy)
}

fn validated_input(form: &GalaxyForm) -> AppResult<GalaxyInput> {
    let input = form.parse()?;
    input.validate()?;
    Ok(input)
}

fn new_page(error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "New galaxy",
        action: format!("{LIST_PATH}/new"),
        cancel: LIST_PATH,
        error,
    }
}

fn edit_page(id: DbId, error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "Edit galaxy",
        action: format!("{LIST_PATH}/{id}/edit"),
        cancel: LIST_PATH,
        error,
    }
}
