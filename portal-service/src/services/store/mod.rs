pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::models::{DemoRequest, StatusCheck};
use async_trait::async_trait;
use service_core::error::AppError;

/// The persistence gateway. One implementation talks to MongoDB, one keeps
/// records in memory for tests and credential-less local runs; handlers only
/// ever see this trait.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;

    /// Status checks in stored (insertion) order, up to `limit`.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError>;

    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<(), AppError>;

    /// Demo requests ordered by `created_at` descending, up to `limit`.
    async fn list_demo_requests(&self, limit: i64) -> Result<Vec<DemoRequest>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
