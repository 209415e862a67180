use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::models::Project;
use crate::repositories::ProjectRepository;
use crate::state::AppState;

// ============ Request/Response DTOs ============

/// Wire shape of a project document. Identifiers and timestamps are
/// caller-supplied; the server stores the document verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectBody {
    pub project_id: String,
    pub name: String,
    #[schema(value_type = Vec<Object>)]
    pub components: Vec<serde_json::Map<String, serde_json::Value>>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProjectBody> for Project {
    fn from(body: ProjectBody) -> Self {
        Self {
            project_id: body.project_id,
            name: body.name,
            components: body.components,
            created_at: body.created_at,
            updated_at: body.updated_at,
        }
    }
}

impl From<Project> for ProjectBody {
    fn from(p: Project) -> Self {
        Self {
            project_id: p.project_id,
            name: p.name,
            components: p.components,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateProjectResponse {
    pub message: String,
    pub project_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectBody>,
}

// ============ Handlers ============

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = ProjectBody,
    responses(
        (status = 200, description = "Project created successfully", body = CreateProjectResponse),
        (status = 409, description = "Project with this identifier already exists"),
        (status = 500, description = "Store fault")
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectBody>,
) -> AppResult<Json<CreateProjectResponse>> {
    let project: Project = payload.into();
    ProjectRepository::create(&state.mongo_db(), &project).await?;

    Ok(Json(CreateProjectResponse {
        message: "Project created successfully".to_string(),
        project_id: project.project_id,
    }))
}

/// List all projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "List of projects", body = ProjectListResponse),
        (status = 500, description = "Store fault")
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::list(&state.mongo_db()).await?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(|p| p.into()).collect(),
    }))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project document", body = ProjectBody),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectBody>> {
    let project = ProjectRepository::get(&state.mongo_db(), &id).await?;
    Ok(Json(project.into()))
}

/// Replace a project wholesale
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    request_body = ProjectBody,
    responses(
        (status = 200, description = "Project updated successfully", body = MessageResponse),
        (status = 400, description = "Body project_id does not match path"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProjectBody>,
) -> AppResult<Json<MessageResponse>> {
    // A body that names a different project than the path is a caller bug,
    // not a replace request
    if payload.project_id != id {
        return Err(AppError::Validation(format!(
            "body project_id '{}' does not match path identifier '{}'",
            payload.project_id, id
        )));
    }

    let project: Project = payload.into();
    ProjectRepository::update(&state.mongo_db(), &id, &project).await?;

    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = MessageResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    ProjectRepository::delete(&state.mongo_db(), &id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
