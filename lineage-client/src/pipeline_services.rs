//! Pipeline service API endpoints

use crate::MetadataClient;
use crate::error::Result;
use lineage_core::domain::pipeline_service::PipelineService;
use lineage_core::dto::pipeline_service::CreatePipelineService;
use tracing::debug;

impl MetadataClient {
    // =============================================================================
    // Pipeline Services
    // =============================================================================

    /// Get a pipeline service by name
    ///
    /// # Arguments
    /// * `name` - The service name
    ///
    /// # Returns
    /// The service record, or `None` if no service has that name
    ///
    /// # Example
    /// ```no_run
    /// # use lineage_client::{MetadataClient, ServerConfig};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = MetadataClient::new(ServerConfig::new("http://localhost:8585"))?;
    /// let service = client.get_pipeline_service("airflow").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_pipeline_service(&self, name: &str) -> Result<Option<PipelineService>> {
        let url = format!(
            "{}/services/pipelineServices/name/{}",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("GET {}", url);
        let response = self.authorize(self.client.get(&url)).send().await?;

        self.handle_optional_response(response).await
    }

    /// Register a new pipeline service
    ///
    /// # Arguments
    /// * `req` - The service creation request
    ///
    /// # Returns
    /// The created service
    pub async fn create_pipeline_service(
        &self,
        req: &CreatePipelineService,
    ) -> Result<PipelineService> {
        let url = format!("{}/services/pipelineServices", self.base_url);
        debug!("POST {}", url);
        let response = self.authorize(self.client.post(&url)).json(req).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{AuthProvider, ClientError, MetadataClient, ServerConfig};
    use lineage_core::domain::pipeline_service::PipelineServiceType;
    use lineage_core::dto::pipeline_service::CreatePipelineService;
    use mockito::{Matcher, Server};

    const SERVICE_ID: &str = "6a2a8c1e-3f0b-4a8e-9d0e-3c1d2b4a5f60";

    #[tokio::test]
    async fn test_get_pipeline_service_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/services/pipelineServices/name/airflow")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"id":"{}","name":"airflow","serviceType":"Airflow"}}"#,
                SERVICE_ID
            ))
            .create_async()
            .await;

        let client = MetadataClient::new(ServerConfig::new(server.url())).unwrap();
        let service = client.get_pipeline_service("airflow").await.unwrap().unwrap();

        assert_eq!(service.id.to_string(), SERVICE_ID);
        assert_eq!(service.service_type, PipelineServiceType::Airflow);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_pipeline_service_absent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/services/pipelineServices/name/airflow")
            .with_status(404)
            .with_body(r#"{"code":404,"message":"pipelineService instance for airflow not found"}"#)
            .create_async()
            .await;

        let client = MetadataClient::new(ServerConfig::new(server.url())).unwrap();
        let service = client.get_pipeline_service("airflow").await.unwrap();

        assert!(service.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_pipeline_service_encodes_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/services/pipelineServices/name/prod%20airflow")
            .with_status(404)
            .create_async()
            .await;

        let client = MetadataClient::new(ServerConfig::new(server.url())).unwrap();
        assert!(client.get_pipeline_service("prod airflow").await.unwrap().is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_pipeline_service_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/services/pipelineServices")
            .match_header("authorization", "Bearer sso-secret")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "airflow",
                "serviceType": "Airflow",
                "pipelineUrl": "http://localhost:8080"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"id":"{}","name":"airflow","serviceType":"Airflow","pipelineUrl":"http://localhost:8080"}}"#,
                SERVICE_ID
            ))
            .create_async()
            .await;

        let config = ServerConfig::new(server.url())
            .with_auth(AuthProvider::Google, Some("sso-secret".to_string()));
        let client = MetadataClient::new(config).unwrap();
        let req = CreatePipelineService::airflow("airflow", "http://localhost:8080");
        let service = client.create_pipeline_service(&req).await.unwrap();

        assert_eq!(service.name, "airflow");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_lookup() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/services/pipelineServices/name/airflow")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let client = MetadataClient::new(ServerConfig::new(server.url())).unwrap();
        let err = client.get_pipeline_service("airflow").await.unwrap_err();

        assert!(err.is_auth_error());
        assert!(matches!(err, ClientError::Unauthorized { status: 401, .. }));
        mock.assert_async().await;
    }
}
