//! Pipeline DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity_reference::EntityReference;

/// Request to create or update a pipeline, matched by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipeline {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub pipeline_url: String,
    pub tasks: Vec<EntityReference>,
    pub service: EntityReference,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_pipeline_payload_shape() {
        let service_id = Uuid::new_v4();
        let task_id = Uuid::new_v4();
        let req = CreatePipeline {
            name: "etl_daily".to_string(),
            display_name: "etl_daily".to_string(),
            description: None,
            pipeline_url: "http://localhost:8080/tree?dag_id=etl_daily".to_string(),
            tasks: vec![EntityReference::task(task_id)],
            service: EntityReference::pipeline_service(service_id),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["displayName"], "etl_daily");
        assert_eq!(json["pipelineUrl"], "http://localhost:8080/tree?dag_id=etl_daily");
        assert_eq!(json["tasks"][0]["type"], "task");
        assert_eq!(json["service"]["id"], service_id.to_string());
        assert!(json["description"].is_null());
    }
}
