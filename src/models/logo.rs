use serde::{Deserialize, Serialize};

/// A saved generated-logo record. Append-only: logos are never updated
/// or deleted once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Logo {
    pub logo_id: String,
    pub name: String,
    /// The text prompt the image was generated from
    pub prompt: String,
    /// `data:image/png;base64,...` URI embedding the raster bytes
    pub image_data: String,
    pub created_at: String,
}
