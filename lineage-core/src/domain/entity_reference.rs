//! Entity references
//!
//! Records point at each other through `{id, type}` pairs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference type used for pipeline service back-references
pub const PIPELINE_SERVICE: &str = "pipelineService";

/// Reference type used for task references on a pipeline
pub const TASK: &str = "task";

/// A typed pointer to another catalog entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub entity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl EntityReference {
    /// Creates a bare reference from an id and entity type
    pub fn new(id: Uuid, entity_type: impl Into<String>) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
            name: None,
            href: None,
        }
    }

    /// Reference to a pipeline service record
    pub fn pipeline_service(id: Uuid) -> Self {
        Self::new(id, PIPELINE_SERVICE)
    }

    /// Reference to a task record
    pub fn task(id: Uuid) -> Self {
        Self::new(id, TASK)
    }
}
