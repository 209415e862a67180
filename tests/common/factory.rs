use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};

use sitebuilder::error::{AppError, AppResult};
use sitebuilder::services::ImageGenerator;

/// Image generator stub that returns distinct non-empty byte payloads
#[allow(dead_code)]
pub struct CountingGenerator {
    calls: AtomicU32,
}

impl CountingGenerator {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl ImageGenerator for CountingGenerator {
    async fn generate(&self, _prompt: &str, count: u32) -> AppResult<Vec<Vec<u8>>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        Ok((0..count)
            .map(|i| format!("png-bytes-{}-{}", call, i).into_bytes())
            .collect())
    }
}

/// Image generator stub that always fails, as a dead provider would
#[allow(dead_code)]
pub struct FailingGenerator;

#[async_trait]
impl ImageGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _count: u32) -> AppResult<Vec<Vec<u8>>> {
        Err(AppError::Generation("provider unavailable".to_string()))
    }
}

/// Build a valid project request body
#[allow(dead_code)]
pub fn project_json(project_id: &str) -> Value {
    json!({
        "project_id": project_id,
        "name": "My Website",
        "components": [
            { "type": "header", "text": "Welcome" },
            { "type": "button", "label": "Sign up", "color": "blue" }
        ],
        "created_at": "2024-01-15T10:00:00Z",
        "updated_at": "2024-01-15T10:00:00Z"
    })
}

/// Build a valid logo request body
#[allow(dead_code)]
pub fn logo_json(logo_id: &str) -> Value {
    json!({
        "logo_id": logo_id,
        "name": "Acme logo",
        "prompt": "Create a modern professional logo for Acme",
        "image_data": "data:image/png;base64,cG5nLWJ5dGVz",
        "created_at": "2024-01-15T10:00:00Z"
    })
}
