use stash_core::UserRecord;

use serde::Serialize;
use serde_json::Value;

/// Response for GET /api/load/{username}: the stored document,
/// returned verbatim.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub data: Value,
}

impl From<UserRecord> for LoadResponse {
    fn from(record: UserRecord) -> Self {
        Self { data: record.data }
    }
}
