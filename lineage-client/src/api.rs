//! Catalog API trait
//!
//! The lineage workflow talks to the catalog through this trait so it can be
//! exercised against an in-memory fake.

use async_trait::async_trait;
use lineage_core::domain::pipeline::Pipeline;
use lineage_core::domain::pipeline_service::PipelineService;
use lineage_core::domain::task::Task;
use lineage_core::dto::pipeline::CreatePipeline;
use lineage_core::dto::pipeline_service::CreatePipelineService;
use lineage_core::dto::task::CreateTask;

use crate::MetadataClient;
use crate::error::Result;

/// Operations the lineage workflow needs from the catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Looks up a pipeline service by name; `None` when it is not registered
    async fn get_pipeline_service(&self, name: &str) -> Result<Option<PipelineService>>;

    /// Registers a pipeline service
    async fn create_pipeline_service(&self, req: &CreatePipelineService)
    -> Result<PipelineService>;

    /// Creates a task or updates the one with the same name
    async fn create_or_update_task(&self, req: &CreateTask) -> Result<Task>;

    /// Creates a pipeline or updates the one with the same name
    async fn create_or_update_pipeline(&self, req: &CreatePipeline) -> Result<Pipeline>;
}

#[async_trait]
impl CatalogApi for MetadataClient {
    async fn get_pipeline_service(&self, name: &str) -> Result<Option<PipelineService>> {
        MetadataClient::get_pipeline_service(self, name).await
    }

    async fn create_pipeline_service(
        &self,
        req: &CreatePipelineService,
    ) -> Result<PipelineService> {
        MetadataClient::create_pipeline_service(self, req).await
    }

    async fn create_or_update_task(&self, req: &CreateTask) -> Result<Task> {
        MetadataClient::create_or_update_task(self, req).await
    }

    async fn create_or_update_pipeline(&self, req: &CreatePipeline) -> Result<Pipeline> {
        MetadataClient::create_or_update_pipeline(self, req).await
    }
}
