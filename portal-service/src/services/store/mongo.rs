use super::Store;
use crate::models::{DemoRequest, StatusCheck};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::FindOptions, options::IndexOptions, Client as MongoClient, Collection,
    Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for portal-service");

        // Descending created_at index backs the newest-first demo request list
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc_idx".to_string())
                    .build(),
            )
            .build();

        self.demo_requests()
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create created_at index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_idx".to_string())
                    .build(),
            )
            .build();

        self.status_checks()
            .create_index(timestamp_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create timestamp index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    pub fn demo_requests(&self) -> Collection<DemoRequest> {
        self.db.collection("demo_requests")
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks()
            .insert_one(check, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert status check: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        let find_options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .status_checks()
            .find(None, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list status checks: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let checks: Vec<StatusCheck> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect status checks: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(checks)
    }

    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<(), AppError> {
        self.demo_requests()
            .insert_one(request, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert demo request: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn list_demo_requests(&self, limit: i64) -> Result<Vec<DemoRequest>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .build();

        let cursor = self
            .demo_requests()
            .find(None, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list demo requests: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let requests: Vec<DemoRequest> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect demo requests: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(requests)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
