use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single status-check record. Immutable once created; `id` and
/// `timestamp` are filled by the constructor, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(rename = "_id")]
    pub id: String,
    pub client_name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}
