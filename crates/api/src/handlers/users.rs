//! Admin user management.
//!
//! Passwords are hashed before they reach the repository and are never
//! echoed back into a form. The account with id 1 cannot be deleted.

use axum::extract::{Query, State};
use axum::response::{Html, Response};
use axum::Form;
use cosmos_core::error::CoreError;
use cosmos_core::roles::PROTECTED_USER_ID;
use cosmos_core::types::DbId;
use cosmos_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use cosmos_db::repositories::UserRepo;

use super::{EntityId, redirect_with_success, rejected_form, validation_message};
use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::forms::{FlashQuery, UserForm};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;
use crate::views;
use crate::views::admin::ConfirmDelete;
use crate::views::forms::FormPage;

const LIST_PATH: &str = "/admin/users";
const IDENTITY_TAKEN: &str = "A user with this username or email already exists";

/// GET /admin/users
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(flash): Query<FlashQuery>,
) -> AppResult<Html<String>> {
    let users: Vec<UserResponse> = UserRepo::list(&state.pool)
        .await?
        .iter()
        .map(UserResponse::from)
        .collect();
    Ok(Html(views::admin::user_table(
        &admin.username,
        &users,
        flash.success.as_deref(),
    )))
}

/// GET /admin/users/{id}
pub async fn show(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let user = find(&state, id).await?;
    Ok(Html(views::admin::user_detail(
        &admin.username,
        &UserResponse::from(&user),
    )))
}

/// GET /admin/users/new
pub async fn new_form(RequireAdmin(admin): RequireAdmin) -> Html<String> {
    let values = UserForm {
        role: cosmos_core::roles::ROLE_USER.to_string(),
        ..Default::default()
    };
    Html(views::forms::user_form(
        &admin.username,
        &new_page(None),
        &values,
        false,
    ))
}

/// POST /admin/users/new
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    let input = match validated_create(&state, &form).await {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = new_page(Some(message.as_str()));
            let html = views::forms::user_form(&admin.username, &page, &form, false);
            return Ok(rejected_form(html));
        }
    };

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.id,
        admin_id = admin.user_id,
        role = %user.role,
        "User created"
    );
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("User '{}' created", user.username),
    ))
}

/// GET /admin/users/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let user = find(&state, id).await?;
    Ok(Html(views::forms::user_form(
        &admin.username,
        &edit_page(id, None),
        &UserForm::from_user(&user),
        true,
    )))
}

/// POST /admin/users/{id}/edit
///
/// An empty password field keeps the current password.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    find(&state, id).await?;

    let input = match validated_update(&state, id, &form).await {
        Ok(input) => input,
        Err(err) => {
            let message = validation_message(err)?;
            let page = edit_page(id, Some(message.as_str()));
            let html = views::forms::user_form(&admin.username, &page, &form, true);
            return Ok(rejected_form(html));
        }
    };

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    tracing::info!(
        user_id = user.id,
        admin_id = admin.user_id,
        password_changed = input.password_hash.is_some(),
        "User updated"
    );
    Ok(redirect_with_success(
        LIST_PATH,
        &format!("User '{}' updated", user.username),
    ))
}

/// GET /admin/users/{id}/delete
pub async fn confirm_delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let user = find(&state, id).await?;
    let confirm = ConfirmDelete {
        entity: "user",
        name: &user.username,
        action: format!("{LIST_PATH}/{id}/delete"),
        cancel: LIST_PATH,
        blocked: (id == PROTECTED_USER_ID)
            .then(|| "The primary administrator account cannot be deleted.".to_string()),
    };
    Ok(Html(views::admin::confirm_delete(&admin.username, &confirm)))
}

/// POST /admin/users/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    EntityId(id): EntityId,
) -> AppResult<Response> {
    // The repository decides protection before existence, so id 1 is a
    // conflict even when that row is gone.
    let username = UserRepo::find_by_id(&state.pool, id)
        .await?
        .map(|user| user.username);
    UserRepo::delete(&state.pool, id)
        .await?
        .into_result("User", id)?;

    tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted");
    let message = match username {
        Some(name) => format!("User '{name}' deleted"),
        None => format!("User {id} deleted"),
    };
    Ok(redirect_with_success(LIST_PATH, &message))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find(state: &AppState, id: DbId) -> AppResult<User> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(user)
}

fn check_password(password: &str) -> Result<(), CoreError> {
    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(CoreError::Validation)
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

async fn validated_create(state: &AppState, form: &UserForm) -> AppResult<CreateUser> {
    let mut input = CreateUser {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password_hash: String::new(),
        role: form.role.trim().to_string(),
    };
    input.validate()?;
    check_password(&form.password)?;
    if UserRepo::identity_taken(&state.pool, &input.username, &input.email, None).await? {
        return Err(CoreError::Validation(IDENTITY_TAKEN.into()).into());
    }
    input.password_hash = hash(&form.password)?;
    Ok(input)
}

async fn validated_update(state: &AppState, id: DbId, form: &UserForm) -> AppResult<UpdateUser> {
    let mut input = UpdateUser {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        role: form.role.trim().to_string(),
        password_hash: None,
    };
    input.validate()?;
    if !form.password.is_empty() {
        check_password(&form.password)?;
    }
    if UserRepo::identity_taken(&state.pool, &input.username, &input.email, Some(id)).await? {
        return Err(CoreError::Validation(IDENTITY_TAKEN.into()).into());
    }
    if !form.password.is_empty() {
        input.password_hash = Some(hash(&form.password)?);
    }
    Ok(input)
}

fn new_page(error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "New user",
        action: format!("{LIST_PATH}/new"),
        cancel: LIST_PATH,
        error,
    }
}

fn edit_page(id: DbId, error: Option<&str>) -> FormPage<'_> {
    FormPage {
        title: "Edit user",
        action: format!("{LIST_PATH}/{id}/edit"),
        cancel: LIST_PATH,
        error,
    }
}
