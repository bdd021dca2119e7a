//! Repository for per-user opaque JSON documents.
//!
//! The table is a key-value document store: `username` is the primary
//! key and `data` holds whatever JSON the client sent. Writes go
//! through a single upsert statement so concurrent saves for the same
//! username serialize on the row and apply last-write-wins by commit
//! order; there is no read-modify-write cycle to race.

use crate::Result as DbErrorResult;

use stash_core::UserRecord;

use serde_json::Value;
use sqlx::{PgPool, Row};

pub struct UserStorageRepository {
    pool: PgPool,
}

impl UserStorageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the document for `username`, or replace it if one exists.
    /// `updated_at` is refreshed by the store on both paths.
    pub async fn upsert(&self, username: &str, data: &Value) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO user_storage (username, data, updated_at)
              VALUES ($1, $2, NOW())
              ON CONFLICT (username)
              DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
              "#,
        )
        .bind(username)
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
              SELECT username, data, updated_at
              FROM user_storage
              WHERE username = $1
              "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<UserRecord> {
            Ok(UserRecord {
                username: r.try_get("username")?,
                data: r.try_get("data")?,
                updated_at: r.try_get("updated_at")?,
            })
        })
        .transpose()
    }
}
