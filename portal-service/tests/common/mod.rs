use portal_service::config::{PortalConfig, StoreBackend};
use portal_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub api_address: String,
}

impl TestApp {
    /// Spawn the app on an ephemeral port with the in-memory store and no
    /// LLM credential (the "not configured" streaming state).
    pub async fn spawn() -> Self {
        Self::spawn_with_llm_key(None).await
    }

    /// Spawn with an LLM credential present (the placeholder streaming state).
    pub async fn spawn_with_llm_key(llm_key: Option<&str>) -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        std::env::set_var("STORE_BACKEND", "memory");

        let mut config = PortalConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.store.backend = StoreBackend::Memory;
        config.llm.api_key = llm_key.map(|key| key.to_string());

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);
        let api_address = format!("{}/api", address);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            api_address,
        }
    }
}
