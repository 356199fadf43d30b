//! Task DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity_reference::EntityReference;

/// Request to create or update a task, matched by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: String,
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub task_url: String,
    pub upstream_tasks: Vec<String>,
    pub downstream_tasks: Vec<String>,
    pub service: EntityReference,
}
