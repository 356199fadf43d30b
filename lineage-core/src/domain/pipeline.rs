//! Pipeline domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity_reference::EntityReference;

/// A pipeline record as returned by the catalog
///
/// One pipeline per DAG; tasks are referenced, not embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub id: Uuid,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_url: Option<String>,

    #[serde(default)]
    pub tasks: Vec<EntityReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityReference>,
}
