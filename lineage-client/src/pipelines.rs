//! Pipeline API endpoints

use crate::MetadataClient;
use crate::error::Result;
use lineage_core::domain::pipeline::Pipeline;
use lineage_core::dto::pipeline::CreatePipeline;
use tracing::debug;

impl MetadataClient {
    // =============================================================================
    // Pipelines
    // =============================================================================

    /// Create a pipeline, or update the existing pipeline with the same name
    ///
    /// # Arguments
    /// * `req` - The pipeline creation request
    ///
    /// # Returns
    /// The stored pipeline
    pub async fn create_or_update_pipeline(&self, req: &CreatePipeline) -> Result<Pipeline> {
        let url = format!("{}/pipelines", self.base_url);
        debug!("PUT {}", url);
        let response = self.authorize(self.client.put(&url)).json(req).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{MetadataClient, ServerConfig};
    use lineage_core::domain::entity_reference::EntityReference;
    use lineage_core::dto::pipeline::CreatePipeline;
    use mockito::{Matcher, Server};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_or_update_pipeline() {
        let service_id = Uuid::new_v4();
        let task_id = Uuid::new_v4();
        let pipeline_id = Uuid::new_v4();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/pipelines")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "etl_daily",
                "displayName": "etl_daily",
                "description": "Daily ETL",
                "pipelineUrl": "http://localhost:8080/tree?dag_id=etl_daily",
                "tasks": [{ "id": task_id, "type": "task" }],
                "service": { "id": service_id, "type": "pipelineService" }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": pipeline_id,
                    "name": "etl_daily",
                    "tasks": [{ "id": task_id, "type": "task", "name": "extract" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = MetadataClient::new(ServerConfig::new(server.url())).unwrap();
        let pipeline = client
            .create_or_update_pipeline(&CreatePipeline {
                name: "etl_daily".to_string(),
                display_name: "etl_daily".to_string(),
                description: Some("Daily ETL".to_string()),
                pipeline_url: "http://localhost:8080/tree?dag_id=etl_daily".to_string(),
                tasks: vec![EntityReference::task(task_id)],
                service: EntityReference::pipeline_service(service_id),
            })
            .await
            .unwrap();

        assert_eq!(pipeline.id, pipeline_id);
        assert_eq!(pipeline.tasks.len(), 1);
        assert_eq!(pipeline.tasks[0].id, task_id);
        mock.assert_async().await;
    }
}
