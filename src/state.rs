use std::sync::Arc;

use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client as MongoClient, Database, IndexModel};

use crate::config::Config;
use crate::models::{Logo, Project};
use crate::repositories::logo::LOGOS_COLLECTION;
use crate::repositories::project::PROJECTS_COLLECTION;
use crate::services::{ImageGenerator, ImagenClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub mongo_client: MongoClient,
    pub config: Config,
    /// Generative-image provider client
    pub image_client: Arc<dyn ImageGenerator>,
}

impl AppState {
    /// Create a new AppState by connecting to MongoDB and building the
    /// image provider client
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let image_client = ImagenClient::new(&config)
            .map_err(|e| AppStateError::HttpClient(e.to_string()))?;

        Self::with_image_client(config, Arc::new(image_client)).await
    }

    /// Create AppState with a custom image generator (for testing)
    pub async fn with_image_client(
        config: Config,
        image_client: Arc<dyn ImageGenerator>,
    ) -> Result<Self, AppStateError> {
        let mongo_client = MongoClient::with_uri_str(&config.mongodb_url)
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))?;

        let state = Self {
            mongo_client,
            config,
            image_client,
        };

        state.ensure_indexes().await?;

        Ok(state)
    }

    /// Get MongoDB database (configurable via MONGODB_DATABASE env var)
    pub fn mongo_db(&self) -> Database {
        self.mongo_client.database(&self.config.mongodb_database)
    }

    /// Create the unique indexes that back duplicate-identifier detection
    async fn ensure_indexes(&self) -> Result<(), AppStateError> {
        let db = self.mongo_db();
        let unique = IndexOptions::builder().unique(true).build();

        db.collection::<Project>(PROJECTS_COLLECTION)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "project_id": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))?;

        db.collection::<Logo>(LOGOS_COLLECTION)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "logo_id": 1 })
                    .options(unique)
                    .build(),
            )
            .await
            .map_err(|e| AppStateError::Mongo(e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("MongoDB connection error: {0}")]
    Mongo(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
