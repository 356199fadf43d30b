//! Pipeline service DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pipeline_service::PipelineServiceType;

/// Request to register a pipeline service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineService {
    pub name: String,
    pub service_type: PipelineServiceType,
    pub pipeline_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreatePipelineService {
    /// Registration payload for an Airflow deployment
    pub fn airflow(name: impl Into<String>, pipeline_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type: PipelineServiceType::Airflow,
            pipeline_url: pipeline_url.into(),
            description: None,
        }
    }
}
