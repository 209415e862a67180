use serde::{Deserialize, Serialize};

/// A website-builder project document.
///
/// Identifiers and timestamps are caller-supplied: the frontend assigns
/// `project_id` before the first save and stamps ISO-8601 strings itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    /// Ordered canvas components; each entry is a free-form JSON object
    pub components: Vec<serde_json::Map<String, serde_json::Value>>,
    pub created_at: String,
    pub updated_at: String,
}
