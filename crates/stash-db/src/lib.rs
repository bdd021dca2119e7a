pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_storage_repository::UserStorageRepository;

use sqlx::PgPool;

/// Apply embedded migrations, creating the `user_storage` table on
/// first startup.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(DbError::migration)?;

    Ok(())
}
