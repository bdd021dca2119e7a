use std::path::PathBuf;

use sqlx::PgPool;

/// Shared application state handed to every handler. The pool is the
/// only cross-request resource; checkout/return of connections is
/// scoped per statement by sqlx.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
}
