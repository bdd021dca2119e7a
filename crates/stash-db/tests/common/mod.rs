#![allow(dead_code)]

//! Helpers for repository tests that need a live Postgres server.
//!
//! Point STASH_TEST_DATABASE_URL at a scratch database and run the
//! ignored tests with `cargo test -- --ignored`.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub async fn create_test_pool() -> PgPool {
    let url = std::env::var("STASH_TEST_DATABASE_URL")
        .expect("STASH_TEST_DATABASE_URL must be set for live database tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    stash_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Remove any leftover record so each test starts from a known state.
pub async fn clear_user(pool: &PgPool, username: &str) {
    sqlx::query("DELETE FROM user_storage WHERE username = $1")
        .bind(username)
        .execute(pool)
        .await
        .expect("Failed to clear test user");
}

pub async fn count_records(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_storage WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to count records")
}
