//! Task domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity_reference::EntityReference;

/// A task record as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_url: Option<String>,

    #[serde(default)]
    pub upstream_tasks: Vec<String>,

    #[serde(default)]
    pub downstream_tasks: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityReference>,
}
