use crate::dtos::CreateDemoRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A demo request submitted from the marketing site. Immutable once created.
///
/// `submitted_at` is the client's claimed submission time, stored verbatim
/// for attribution; `created_at` is the server clock and is what ordering
/// is based on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub utm: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl DemoRequest {
    pub fn new(payload: CreateDemoRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            email: payload.email,
            company: payload.company,
            notes: payload.notes,
            utm: payload.utm,
            submitted_at: payload.submitted_at,
            created_at: Utc::now(),
        }
    }
}
