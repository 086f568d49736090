//! Integration tests for the user repository: uniqueness, bootstrap seeding,
//! optional password updates and the protected account.

use assert_matches::assert_matches;
use cosmos_core::error::CoreError;
use cosmos_db::error::RepoError;
use cosmos_db::models::user::{CreateUser, UpdateUser};
use cosmos_db::models::DeleteOutcome;
use cosmos_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(username: &str, role: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@cosmos.test"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: role.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_first_only_seeds_an_empty_table(pool: PgPool) {
    let seeded = UserRepo::create_first(&pool, &new_user("admin", "admin"))
        .await
        .unwrap()
        .expect("empty table should be seeded");
    assert_eq!(seeded.id, 1);
    assert_eq!(seeded.role, "admin");

    let second = UserRepo::create_first(&pool, &new_user("other", "admin"))
        .await
        .unwrap();
    assert!(second.is_none());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("vega", "user")).await.unwrap();

    let mut dup = new_user("vega", "user");
    dup.email = "different@cosmos.test".to_string();
    let err = UserRepo::create(&pool, &dup).await.expect_err("duplicate");
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_identity_taken_excludes_self(pool: PgPool) {
    let vega = UserRepo::create(&pool, &new_user("vega", "user")).await.unwrap();

    assert!(UserRepo::identity_taken(&pool, "vega", "x@y.z", None).await.unwrap());
    assert!(UserRepo::identity_taken(&pool, "x", "vega@cosmos.test", None).await.unwrap());
    assert!(!UserRepo::identity_taken(&pool, "vega", "vega@cosmos.test", Some(vega.id))
        .await
        .unwrap());
    assert!(!UserRepo::identity_taken(&pool, "altair", "altair@cosmos.test", None)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_keeps_password_unless_given(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("vega", "user")).await.unwrap();

    let mut update = UpdateUser {
        username: "vega2".to_string(),
        email: "vega2@cosmos.test".to_string(),
        role: "admin".to_string(),
        password_hash: None,
    };
    let updated = UserRepo::update(&pool, user.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.username, "vega2");
    assert_eq!(updated.role, "admin");
    assert_eq!(updated.password_hash, user.password_hash);

    update.password_hash = Some("$argon2id$new".to_string());
    let updated = UserRepo::update(&pool, user.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.password_hash, "$argon2id$new");

    assert!(UserRepo::update(&pool, 999, &update).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_user_is_rejected_before_insert(pool: PgPool) {
    let err = UserRepo::create(&pool, &new_user("root", "superuser"))
        .await
        .expect_err("unknown role must be rejected");
    assert_matches!(err, RepoError::Validation(CoreError::Validation(_)));

    let mut blank = new_user("vega", "user");
    blank.username = "  ".to_string();
    assert_matches!(
        UserRepo::create_first(&pool, &blank).await,
        Err(RepoError::Validation(_))
    );
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_check_constraint(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO users (username, email, password_hash, role)
         VALUES ('root', 'root@cosmos.test', 'x', 'superuser')",
    )
    .execute(&pool)
    .await
    .expect_err("unknown role must be rejected");
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.code().as_deref(), Some("23514"));
    assert_eq!(db_err.constraint(), Some("ck_users_role"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_one_is_protected(pool: PgPool) {
    let first = UserRepo::create(&pool, &new_user("admin", "admin")).await.unwrap();
    let second = UserRepo::create(&pool, &new_user("guest", "user")).await.unwrap();
    assert_eq!(first.id, 1);

    let outcome = UserRepo::delete(&pool, first.id).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Protected);
    assert_matches!(outcome.into_result("User", 1), Err(CoreError::Conflict(_)));
    assert!(UserRepo::find_by_id(&pool, 1).await.unwrap().is_some());

    assert_eq!(UserRepo::delete(&pool, second.id).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(UserRepo::delete(&pool, second.id).await.unwrap(), DeleteOutcome::NotFound);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_counts_and_ordering(pool: PgPool) {
    UserRepo::create(&pool, &new_user("a", "admin")).await.unwrap();
    UserRepo::create(&pool, &new_user("b", "user")).await.unwrap();
    UserRepo::create(&pool, &new_user("c", "admin")).await.unwrap();

    assert_eq!(UserRepo::count_by_role(&pool, "admin").await.unwrap(), 2);
    let names: Vec<String> = UserRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, ["c", "b", "a"]);
}
