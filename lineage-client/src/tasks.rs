//! Task API endpoints

use crate::MetadataClient;
use crate::error::Result;
use lineage_core::domain::task::Task;
use lineage_core::dto::task::CreateTask;
use tracing::debug;

impl MetadataClient {
    // =============================================================================
    // Tasks
    // =============================================================================

    /// Create a task, or update the existing task with the same name
    ///
    /// # Arguments
    /// * `req` - The task creation request
    ///
    /// # Returns
    /// The stored task
    pub async fn create_or_update_task(&self, req: &CreateTask) -> Result<Task> {
        let url = format!("{}/tasks", self.base_url);
        debug!("PUT {}", url);
        let response = self.authorize(self.client.put(&url)).json(req).send().await?;

        self.handle_response(response).await
    }
}
