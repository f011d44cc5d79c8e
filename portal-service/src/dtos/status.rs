use crate::models::StatusCheck;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusCheck {
    #[validate(length(min = 1, message = "client_name cannot be empty"))]
    pub client_name: String,
}

#[derive(Debug, Serialize)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id,
            client_name: check.client_name,
            timestamp: check.timestamp.to_rfc3339(),
        }
    }
}
