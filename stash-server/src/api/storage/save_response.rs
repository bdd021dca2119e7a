use serde::Serialize;

/// Acknowledgment for a completed save
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}
