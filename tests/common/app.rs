use std::sync::Arc;

use axum_test::TestServer;
use uuid::Uuid;

use sitebuilder::build_router;
use sitebuilder::config::Config;
use sitebuilder::services::ImageGenerator;
use sitebuilder::state::AppState;

use super::factory::CountingGenerator;

/// Test configuration with a unique database per test for isolation
pub fn test_config() -> Config {
    dotenvy::dotenv().ok();

    Config {
        mongodb_url: std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        mongodb_database: format!("websitebuilder_test_{}", Uuid::new_v4().simple()),
        gemini_api_key: "test-api-key".to_string(),
        imagen_base_url: "http://localhost:1".to_string(),
        imagen_model: "imagen-3.0-generate-002".to_string(),
        imagen_timeout_secs: 1,
        imagen_max_attempts: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with a deterministic image generator
    pub async fn new() -> Self {
        Self::with_generator(Arc::new(CountingGenerator::new())).await
    }

    /// Create a test application with a custom image generator
    pub async fn with_generator(generator: Arc<dyn ImageGenerator>) -> Self {
        let config = test_config();

        let state = AppState::with_image_client(config, generator)
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }

    /// Drop the per-test database
    pub async fn cleanup(&self) {
        self.state.mongo_db().drop().await.ok();
    }
}
