//! User record - one stored document per username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's stored document. The `data` value is opaque to the server:
/// it is persisted and returned verbatim, never parsed or validated.
/// At most one record exists per username; saves replace the whole
/// document in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Caller-chosen key, immutable once created.
    pub username: String,
    /// Arbitrary JSON value (object, array, or scalar).
    pub data: Value,
    /// Refreshed by the store on every write.
    pub updated_at: DateTime<Utc>,
}
