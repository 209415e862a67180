pub mod common;
pub mod health;
pub mod logo;
pub mod project;

pub use common::MessageResponse;
pub use health::{health_check, HealthResponse};
pub use logo::{
    generate_image, generate_logo, list_logos, save_logo, GenerateImageRequest,
    GenerateImageResponse, GenerateLogoRequest, GenerateLogoResponse, LogoBody, LogoListResponse,
    SaveLogoResponse,
};
pub use project::{
    create_project, delete_project, get_project, list_projects, update_project,
    CreateProjectResponse, ProjectBody, ProjectListResponse,
};
