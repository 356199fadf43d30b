//! Pipeline service domain model
//!
//! Represents the orchestrator instance registered as a source system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pipeline service record as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineService {
    /// Stable identifier used for back-references
    pub id: Uuid,

    /// Service name, unique within the catalog
    pub name: String,

    /// Kind of orchestrator behind this service
    pub service_type: PipelineServiceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base URL of the orchestrator's web UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Kind of orchestrator a pipeline service represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineServiceType {
    Airflow,
    Prefect,
    Glue,
}

impl std::fmt::Display for PipelineServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineServiceType::Airflow => write!(f, "Airflow"),
            PipelineServiceType::Prefect => write!(f, "Prefect"),
            PipelineServiceType::Glue => write!(f, "Glue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_response() {
        let json = serde_json::json!({
            "id": "6a2a8c1e-3f0b-4a8e-9d0e-3c1d2b4a5f60",
            "name": "airflow",
            "serviceType": "Airflow",
            "pipelineUrl": "http://localhost:8080",
            "href": "http://localhost:8585/api/v1/services/pipelineServices/6a2a8c1e-3f0b-4a8e-9d0e-3c1d2b4a5f60",
            "version": 0.1
        });

        let service: PipelineService = serde_json::from_value(json).unwrap();
        assert_eq!(service.name, "airflow");
        assert_eq!(service.service_type, PipelineServiceType::Airflow);
        assert_eq!(service.pipeline_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_service_type_display() {
        assert_eq!(PipelineServiceType::Airflow.to_string(), "Airflow");
    }
}
