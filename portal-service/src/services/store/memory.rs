use super::Store;
use crate::models::{DemoRequest, StatusCheck};
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Mutex;

/// In-memory store used in tests and for local runs without a MongoDB.
/// Ordering and limit semantics match `MongoStore`: status checks come back
/// in insertion order, demo requests newest first.
#[derive(Default)]
pub struct MemoryStore {
    status_checks: Mutex<Vec<StatusCheck>>,
    demo_requests: Mutex<Vec<DemoRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store mutex poisoned: {}", e)))?
            .push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        let checks = self
            .status_checks
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store mutex poisoned: {}", e)))?
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(checks)
    }

    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<(), AppError> {
        self.demo_requests
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store mutex poisoned: {}", e)))?
            .push(request.clone());
        Ok(())
    }

    async fn list_demo_requests(&self, limit: i64) -> Result<Vec<DemoRequest>, AppError> {
        // Insertion order tracks created_at, so newest-first is reverse order.
        let requests = self
            .demo_requests
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Store mutex poisoned: {}", e)))?
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(requests)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::CreateDemoRequest;

    fn demo(name: &str) -> DemoRequest {
        DemoRequest::new(CreateDemoRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            company: None,
            notes: None,
            utm: None,
            submitted_at: None,
        })
    }

    #[tokio::test]
    async fn status_checks_come_back_in_insertion_order() {
        let store = MemoryStore::new();
        store
            .insert_status_check(&StatusCheck::new("first".to_string()))
            .await
            .unwrap();
        store
            .insert_status_check(&StatusCheck::new("second".to_string()))
            .await
            .unwrap();

        let checks = store.list_status_checks(1000).await.unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].client_name, "first");
        assert_eq!(checks[1].client_name, "second");
    }

    #[tokio::test]
    async fn demo_requests_come_back_newest_first_and_limited() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.insert_demo_request(&demo(name)).await.unwrap();
        }

        let requests = store.list_demo_requests(2).await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].name, "c");
        assert_eq!(requests[1].name, "b");
    }
}
