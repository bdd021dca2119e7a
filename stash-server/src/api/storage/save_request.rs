use serde::Deserialize;
use serde_json::Value;

/// Body of POST /api/save. Both fields are required; they are modeled
/// as options so that absent or null values reach the handler's
/// validation instead of failing inside the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub username: Option<String>,

    /// The document to store, opaque to the server
    #[serde(default)]
    pub data: Option<Value>,
}
