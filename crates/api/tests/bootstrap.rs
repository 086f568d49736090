//! First-start seeding of the administrator account.

mod common;

use assert_matches::assert_matches;
use cosmos_api::auth::password::verify_password;
use cosmos_api::bootstrap::{seed_admin, BootstrapError};
use cosmos_core::roles::PROTECTED_USER_ID;
use cosmos_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeds_admin_into_empty_table(pool: PgPool) {
    let config = common::test_config();

    assert!(seed_admin(&pool, &config.admin).await.unwrap());

    let admin = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert_eq!(admin.id, PROTECTED_USER_ID);
    assert_eq!(admin.role, "admin");
    assert_eq!(admin.email, "admin@cosmos.com");
    assert!(verify_password("bootstrap-pass", &admin.password_hash).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_start_is_a_no_op(pool: PgPool) {
    let config = common::test_config();

    assert!(seed_admin(&pool, &config.admin).await.unwrap());
    assert!(!seed_admin(&pool, &config.admin).await.unwrap());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn existing_users_skip_seeding(pool: PgPool) {
    common::create_user(&pool, "vega", "user", "vega-pass").await;

    assert!(!seed_admin(&pool, &common::test_config().admin).await.unwrap());
    assert!(UserRepo::find_by_username(&pool, "admin").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn weak_bootstrap_password_is_rejected(pool: PgPool) {
    let mut admin = common::test_config().admin;
    admin.password = "123".into();

    let result = seed_admin(&pool, &admin).await;

    assert_matches!(result, Err(BootstrapError::Invalid(_)));
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
}
