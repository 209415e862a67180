use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sitebuilder::config::Config;
use sitebuilder::handlers::{
    CreateProjectResponse, GenerateImageRequest, GenerateImageResponse, GenerateLogoRequest,
    GenerateLogoResponse, HealthResponse, LogoBody, LogoListResponse, MessageResponse,
    ProjectBody, ProjectListResponse, SaveLogoResponse,
};
use sitebuilder::state::AppState;
use sitebuilder::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::project::create_project,
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::logo::generate_image,
        handlers::logo::generate_logo,
        handlers::logo::save_logo,
        handlers::logo::list_logos,
    ),
    components(schemas(
        HealthResponse,
        MessageResponse,
        ProjectBody,
        CreateProjectResponse,
        ProjectListResponse,
        GenerateImageRequest,
        GenerateImageResponse,
        GenerateLogoRequest,
        GenerateLogoResponse,
        LogoBody,
        SaveLogoResponse,
        LogoListResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Projects", description = "Website project persistence endpoints"),
        (name = "Generation", description = "AI image and logo generation endpoints"),
        (name = "Logos", description = "Saved logo persistence endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects to MongoDB, builds indexes)
    tracing::info!("Connecting to MongoDB...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
