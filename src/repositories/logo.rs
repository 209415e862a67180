use bson::doc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::error::{AppError, AppResult};
use crate::models::Logo;

/// Logo repository: saved logos are append-only, so only insert and list
/// exist here.
pub struct LogoRepository;

pub const LOGOS_COLLECTION: &str = "logos";

impl LogoRepository {
    fn collection(db: &Database) -> Collection<Logo> {
        db.collection(LOGOS_COLLECTION)
    }

    /// Insert a logo verbatim. Duplicate `logo_id` surfaces as Conflict
    /// via the unique index created at startup.
    pub async fn save(db: &Database, logo: &Logo) -> AppResult<()> {
        Self::collection(db)
            .insert_one(logo)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::Conflict(_) => AppError::Conflict("Logo".to_string()),
                other => other,
            })?;

        Ok(())
    }

    /// List all saved logos in store-native order
    pub async fn list(db: &Database) -> AppResult<Vec<Logo>> {
        let cursor = Self::collection(db).find(doc! {}).await?;
        let logos = cursor.try_collect().await?;
        Ok(logos)
    }
}
