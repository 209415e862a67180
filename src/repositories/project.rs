use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::error::{AppError, AppResult};
use crate::models::Project;

/// Project repository for document-store operations
pub struct ProjectRepository;

pub const PROJECTS_COLLECTION: &str = "projects";

impl ProjectRepository {
    fn collection(db: &Database) -> Collection<Project> {
        db.collection(PROJECTS_COLLECTION)
    }

    /// Insert a project verbatim. Duplicate `project_id` surfaces as Conflict
    /// via the unique index created at startup.
    pub async fn create(db: &Database, project: &Project) -> AppResult<()> {
        Self::collection(db)
            .insert_one(project)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict("Project".to_string()),
                other => other,
            })?;

        Ok(())
    }

    /// List all projects in store-native order
    pub async fn list(db: &Database) -> AppResult<Vec<Project>> {
        let cursor = Self::collection(db).find(doc! {}).await?;
        let projects = cursor.try_collect().await?;
        Ok(projects)
    }

    /// Find a project by its identifier
    pub async fn get(db: &Database, project_id: &str) -> AppResult<Project> {
        Self::collection(db)
            .find_one(doc! { "project_id": project_id })
            .await?
            .ok_or_else(|| AppError::NotFound("Project".to_string()))
    }

    /// Replace the full document matching `project_id`
    pub async fn update(db: &Database, project_id: &str, project: &Project) -> AppResult<()> {
        let result = Self::collection(db)
            .replace_one(doc! { "project_id": project_id }, project)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Project".to_string()));
        }

        Ok(())
    }

    /// Delete the document matching `project_id`
    pub async fn delete(db: &Database, project_id: &str) -> AppResult<()> {
        let result = Self::collection(db)
            .delete_one(doc! { "project_id": project_id })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound("Project".to_string()));
        }

        Ok(())
    }
}
