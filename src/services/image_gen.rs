use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// External generative-image provider: produce `count` raster images for a
/// text prompt. Implemented by [`ImagenClient`] in production and by mocks
/// in tests.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, count: u32) -> AppResult<Vec<Vec<u8>>>;
}

/// Client for the Imagen models on the Generative Language REST API.
///
/// Outbound calls carry a bounded per-request timeout and are retried with
/// exponential backoff on transient failures (connect/timeout errors,
/// HTTP 429 and 5xx). Provider-side rejections and malformed responses are
/// surfaced immediately as [`AppError::Generation`].
pub struct ImagenClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    max_attempts: u32,
}

const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
}

impl ImagenClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.imagen_timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.imagen_base_url.trim_end_matches('/').to_string(),
            model: config.imagen_model.clone(),
            api_key: config.gemini_api_key.clone(),
            max_attempts: config.imagen_max_attempts.max(1),
        })
    }

    fn predict_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:predict",
            self.base_url, self.model
        )
    }

    async fn predict_once(&self, prompt: &str, count: u32) -> Result<Vec<Vec<u8>>, PredictError> {
        let body = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: count,
            },
        };

        let response = self
            .client
            .post(self.predict_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    PredictError::Transient(format!("request failed: {}", e))
                } else {
                    PredictError::Fatal(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            return Err(PredictError::Transient(format!(
                "provider returned {}",
                status
            )));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PredictError::Fatal(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictError::Fatal(format!("malformed provider response: {}", e)))?;

        if parsed.predictions.len() != count as usize {
            return Err(PredictError::Fatal(format!(
                "provider returned {} images, expected {}",
                parsed.predictions.len(),
                count
            )));
        }

        parsed
            .predictions
            .into_iter()
            .map(|p| {
                BASE64
                    .decode(p.bytes_base64_encoded)
                    .map_err(|e| PredictError::Fatal(format!("undecodable image payload: {}", e)))
            })
            .collect()
    }
}

enum PredictError {
    /// Worth retrying: connect/timeout faults, 429, 5xx
    Transient(String),
    /// Not worth retrying: provider rejection or malformed payload
    Fatal(String),
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    async fn generate(&self, prompt: &str, count: u32) -> AppResult<Vec<Vec<u8>>> {
        let mut delay = RETRY_BASE_DELAY;

        for attempt in 1..=self.max_attempts {
            match self.predict_once(prompt, count).await {
                Ok(images) => return Ok(images),
                Err(PredictError::Fatal(msg)) => return Err(AppError::Generation(msg)),
                Err(PredictError::Transient(msg)) => {
                    if attempt == self.max_attempts {
                        return Err(AppError::Generation(format!(
                            "{} (after {} attempts)",
                            msg, attempt
                        )));
                    }
                    tracing::warn!(
                        "Image generation attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        msg
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }

        unreachable!("retry loop always returns")
    }
}
