use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::Logo;
use crate::repositories::LogoRepository;
use crate::services::LogoService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateImageRequest {
    pub prompt: String,
    /// Number of images to generate (defaults to 1)
    pub count: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateImageResponse {
    /// `data:image/png;base64,...` URIs, one per generated image
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateLogoRequest {
    pub company_name: String,
    pub style: String,
    #[serde(default)]
    pub colors: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateLogoResponse {
    /// Exactly 4 variation data URIs
    pub logos: Vec<String>,
    /// The composed prompt the variations were generated from
    pub prompt: String,
}

/// Wire shape of a saved logo record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogoBody {
    pub logo_id: String,
    pub name: String,
    pub prompt: String,
    pub image_data: String,
    pub created_at: String,
}

impl From<LogoBody> for Logo {
    fn from(body: LogoBody) -> Self {
        Self {
            logo_id: body.logo_id,
            name: body.name,
            prompt: body.prompt,
            image_data: body.image_data,
            created_at: body.created_at,
        }
    }
}

impl From<Logo> for LogoBody {
    fn from(l: Logo) -> Self {
        Self {
            logo_id: l.logo_id,
            name: l.name,
            prompt: l.prompt,
            image_data: l.image_data,
            created_at: l.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveLogoResponse {
    pub message: String,
    pub logo_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoListResponse {
    pub logos: Vec<LogoBody>,
}

// ============ Handlers ============

/// Generate images for a caller-supplied prompt
#[utoipa::path(
    post,
    path = "/api/generate-image",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Generated images", body = GenerateImageResponse),
        (status = 400, description = "Invalid count"),
        (status = 502, description = "Image provider fault")
    ),
    tag = "Generation"
)]
pub async fn generate_image(
    State(state): State<AppState>,
    Json(payload): Json<GenerateImageRequest>,
) -> AppResult<Json<GenerateImageResponse>> {
    let count = payload.count.unwrap_or(1);
    if count == 0 {
        return Err(AppError::Validation("count must be at least 1".to_string()));
    }

    let images =
        LogoService::generate_raw(state.image_client.as_ref(), &payload.prompt, count).await?;

    Ok(Json(GenerateImageResponse { images }))
}

/// Generate 4 logo variations from structured fields
#[utoipa::path(
    post,
    path = "/api/generate-logo",
    request_body = GenerateLogoRequest,
    responses(
        (status = 200, description = "Logo variations and the composed prompt", body = GenerateLogoResponse),
        (status = 502, description = "Image provider fault")
    ),
    tag = "Generation"
)]
pub async fn generate_logo(
    State(state): State<AppState>,
    Json(payload): Json<GenerateLogoRequest>,
) -> AppResult<Json<GenerateLogoResponse>> {
    let (logos, prompt) = LogoService::generate_variations(
        state.image_client.as_ref(),
        &payload.company_name,
        &payload.style,
        &payload.colors,
        &payload.industry,
    )
    .await?;

    Ok(Json(GenerateLogoResponse { logos, prompt }))
}

/// Save a logo record
#[utoipa::path(
    post,
    path = "/api/logos",
    request_body = LogoBody,
    responses(
        (status = 200, description = "Logo saved successfully", body = SaveLogoResponse),
        (status = 409, description = "Logo with this identifier already exists"),
        (status = 500, description = "Store fault")
    ),
    tag = "Logos"
)]
pub async fn save_logo(
    State(state): State<AppState>,
    Json(payload): Json<LogoBody>,
) -> AppResult<Json<SaveLogoResponse>> {
    let logo: Logo = payload.into();
    LogoRepository::save(&state.mongo_db(), &logo).await?;

    Ok(Json(SaveLogoResponse {
        message: "Logo saved successfully".to_string(),
        logo_id: logo.logo_id,
    }))
}

/// List all saved logos
#[utoipa::path(
    get,
    path = "/api/logos",
    responses(
        (status = 200, description = "List of saved logos", body = LogoListResponse),
        (status = 500, description = "Store fault")
    ),
    tag = "Logos"
)]
pub async fn list_logos(State(state): State<AppState>) -> AppResult<Json<LogoListResponse>> {
    let logos = LogoRepository::list(&state.mongo_db()).await?;

    Ok(Json(LogoListResponse {
        logos: logos.into_iter().map(|l| l.into()).collect(),
    }))
}
