pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    storage::{
        load_response::LoadResponse,
        save_request::SaveRequest,
        save_response::SaveResponse,
        storage::{load_data, save_data},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
