use crate::models::DemoRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDemoRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub utm: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListDemoRequestsParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DemoRequestResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub utm: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "submittedAt")]
    pub submitted_at: Option<String>,
    pub created_at: String,
}

impl From<DemoRequest> for DemoRequestResponse {
    fn from(demo: DemoRequest) -> Self {
        Self {
            id: demo.id,
            name: demo.name,
            email: demo.email,
            company: demo.company,
            notes: demo.notes,
            utm: demo.utm,
            submitted_at: demo.submitted_at,
            created_at: demo.created_at.to_rfc3339(),
        }
    }
}
