//! Reporting entry point
//!
//! The host orchestrator calls [`LineageBackend::send_lineage`] after each
//! task instance finishes. Reporting is best effort: any failure is logged
//! and dropped so the instrumented task is never failed by lineage.

use anyhow::{Context, Result};
use lineage_client::{CatalogApi, ClientError, MetadataClient};
use lineage_core::host::{ExecutionContext, TaskInfo};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{Instrument, Span, debug, error, info_span};

use crate::config::{ConfigSource, EnvConfigSource, LineageConfig};
use crate::workflow;

/// Lineage backend plugged into the host orchestrator
#[derive(Clone)]
pub struct LineageBackend {
    source: Arc<dyn ConfigSource>,
}

impl LineageBackend {
    /// Creates a backend reading configuration from `AIRFLOW__LINEAGE__*`
    /// environment variables
    pub fn new() -> Self {
        Self::with_source(EnvConfigSource::new())
    }

    /// Creates a backend reading configuration from a custom source
    pub fn with_source(source: impl ConfigSource + 'static) -> Self {
        let backend = Self {
            source: Arc::new(source),
        };
        let config = backend.config();
        debug!(
            "Lineage backend initialized for service '{}' at {}",
            config.service_name, config.api_endpoint
        );
        backend
    }

    /// Loads the current configuration
    pub fn config(&self) -> LineageConfig {
        LineageConfig::load(self.source.as_ref())
    }

    /// Reports a finished task to the catalog
    ///
    /// Never fails: errors are logged with their full context chain.
    ///
    /// # Arguments
    /// * `operator` - The task that finished
    /// * `inlets` - Declared input data references
    /// * `outlets` - Declared output data references
    /// * `context` - Execution context of the task instance
    pub async fn send_lineage(
        &self,
        operator: &TaskInfo,
        inlets: &[Value],
        outlets: &[Value],
        context: &ExecutionContext,
    ) {
        let config = self.config();
        guarded(
            async {
                let client = MetadataClient::new(config.server_config())
                    .context("Failed to build catalog client")?;
                workflow::report(&config, context, inlets, outlets, &client).await
            }
            .instrument(lineage_span(operator, context)),
        )
        .await;
    }

    /// Like [`Self::send_lineage`], against an already built catalog client
    pub async fn send_lineage_with(
        &self,
        client: &dyn CatalogApi,
        operator: &TaskInfo,
        inlets: &[Value],
        outlets: &[Value],
        context: &ExecutionContext,
    ) {
        let config = self.config();
        guarded(
            workflow::report(&config, context, inlets, outlets, client)
                .instrument(lineage_span(operator, context)),
        )
        .await;
    }

    /// Blocking variant of [`Self::send_lineage`] for hosts without an async
    /// executor
    ///
    /// Runs on a current-thread runtime. When called from inside a tokio
    /// runtime the report is driven on a scoped helper thread instead.
    pub fn send_lineage_blocking(
        &self,
        operator: &TaskInfo,
        inlets: &[Value],
        outlets: &[Value],
        context: &ExecutionContext,
    ) {
        let run = || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to start lineage runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(self.send_lineage(operator, inlets, outlets, context));
        };

        if tokio::runtime::Handle::try_current().is_err() {
            run();
            return;
        }

        std::thread::scope(|scope| {
            if scope.spawn(run).join().is_err() {
                error!("Lineage reporting thread panicked");
            }
        });
    }
}

impl Default for LineageBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn lineage_span(operator: &TaskInfo, context: &ExecutionContext) -> Span {
    info_span!(
        "send_lineage",
        dag_id = %context.dag.dag_id,
        task_id = %operator.task_id
    )
}

/// Awaits `fut`, logging and discarding any error
///
/// Returns whether the future completed successfully.
pub async fn guarded<F>(fut: F) -> bool
where
    F: Future<Output = Result<()>>,
{
    match fut.await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to report lineage: {:#}", e);
            if rejected_credentials(&e) {
                error!("Catalog rejected the credentials; check auth_provider_type and secret_key");
            }
            error!("{:?}", e);
            false
        }
    }
}

/// Whether any error in the chain is an authentication failure from the catalog
fn rejected_credentials(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<ClientError>())
        .any(ClientError::is_auth_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfigSource;
    use crate::workflow::tests::{Call, FakeCatalog, TaskFailure, etl_context, service_record};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_guarded_swallows_errors() {
        let ok = guarded(async { anyhow::Ok(()) }).await;
        let failed = guarded(async { Err::<(), _>(anyhow::anyhow!("network down")) }).await;

        assert!(ok);
        assert!(!failed);
    }

    #[tokio::test]
    async fn test_guarded_workflow_failure_returns_normally() {
        let mut catalog = FakeCatalog::new(Some(service_record(Uuid::new_v4())));
        catalog.task_failure = Some(TaskFailure::Unavailable);
        let config = LineageConfig::default();
        let context = etl_context();

        let completed = guarded(workflow::report(&config, &context, &[], &[], &catalog)).await;

        assert!(!completed);
        assert_eq!(catalog.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_network_error_on_task_upsert_returns_normally() {
        let mut catalog = FakeCatalog::new(Some(service_record(Uuid::new_v4())));
        catalog.task_failure = Some(TaskFailure::Transport);
        let backend = LineageBackend::with_source(MapConfigSource::new());
        let context = etl_context();

        backend
            .send_lineage_with(&catalog, &context.task, &[], &[], &context)
            .await;

        let calls = catalog.calls();
        assert!(matches!(calls.last(), Some(Call::UpsertTask(_))));
        assert!(!calls.iter().any(|call| matches!(call, Call::UpsertPipeline(_))));
    }

    #[test]
    fn test_rejected_credentials_found_through_context() {
        let unauthorized = anyhow::Error::new(ClientError::Unauthorized {
            status: 401,
            message: "token expired".to_string(),
        })
        .context("Failed to look up pipeline service 'airflow'");
        let unavailable = anyhow::Error::new(ClientError::api_error(503, "down"))
            .context("Failed to create or update task 'extract'");

        assert!(rejected_credentials(&unauthorized));
        assert!(!rejected_credentials(&unavailable));
        assert!(!rejected_credentials(&anyhow::anyhow!("bad timestamp")));
    }

    #[tokio::test]
    async fn test_send_lineage_swallows_invalid_auth_config() {
        // SSO provider without a secret cannot build a client
        let backend = LineageBackend::with_source(
            MapConfigSource::new().with("lineage", "auth_provider_type", "google"),
        );
        let context = etl_context();

        backend
            .send_lineage(&context.task, &[], &[], &context)
            .await;
    }

    #[test]
    fn test_blocking_send_outside_runtime() {
        // Nothing listens on port 9; the connection error is swallowed
        let backend = LineageBackend::with_source(
            MapConfigSource::new().with("lineage", "openmetadata_api_endpoint", "http://127.0.0.1:9"),
        );
        let context = etl_context();

        backend.send_lineage_blocking(&context.task, &[], &[], &context);
    }

    #[test]
    fn test_config_is_reloaded_from_source() {
        let backend = LineageBackend::with_source(
            MapConfigSource::new().with("lineage", "airflow_service_name", "etl_airflow"),
        );
        assert_eq!(backend.config().service_name, "etl_airflow");
    }
}
