//! Lineage upsert workflow
//!
//! Reports one finished task to the catalog:
//! - Build web UI links for the DAG and the task
//! - Extract the allowed DAG and task attributes
//! - Look up the pipeline service, registering it if absent
//! - Create or update the task, then the pipeline referencing it
//!
//! Every step may fail; errors propagate to the caller untouched apart from
//! added context. There are no retries.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use lineage_client::CatalogApi;
use lineage_core::domain::entity_reference::EntityReference;
use lineage_core::domain::pipeline_service::PipelineService;
use lineage_core::dto::pipeline::CreatePipeline;
use lineage_core::dto::pipeline_service::CreatePipelineService;
use lineage_core::dto::task::CreateTask;
use lineage_core::host::ExecutionContext;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::LineageConfig;
use crate::extract::{self, AttributeMap};

/// Link to the DAG's tree view
pub fn dag_url(base_url: &str, dag_id: &str) -> String {
    format!("{}/tree?dag_id={}", base_url, dag_id)
}

/// Link to the task's run history
pub fn task_url(base_url: &str, dag_id: &str, task_id: &str) -> String {
    format!(
        "{}/taskinstance/list/?flt1_dag_id_equals={}&_flt_3_task_id={}",
        base_url, dag_id, task_id
    )
}

/// Parses the context's `ts` into epoch milliseconds
///
/// Accepts RFC 3339, or a timestamp without offset which is taken as UTC.
pub fn execution_timestamp_millis(ts: &str) -> Result<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
        return Ok(parsed.timestamp_millis());
    }

    let naive = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f"))
        .with_context(|| format!("Invalid execution timestamp '{}'", ts))?;
    Ok(naive.and_utc().timestamp_millis())
}

/// Reports the finished task and its DAG to the catalog
///
/// # Arguments
/// * `config` - Configuration loaded for this invocation
/// * `context` - Execution context of the finished task instance
/// * `inlets` - Declared input data references
/// * `outlets` - Declared output data references
/// * `client` - Catalog API
pub async fn report(
    config: &LineageConfig,
    context: &ExecutionContext,
    inlets: &[Value],
    outlets: &[Value],
    client: &dyn CatalogApi,
) -> Result<()> {
    info!("Parsing lineage for catalog");
    let dag = &context.dag;
    let task = &context.task;

    let base_url = config.webserver_base_url.trim_end_matches('/');
    let dag_url = dag_url(base_url, &dag.dag_id);
    let task_url = task_url(base_url, &dag.dag_id, &task.task_id);

    let dag_properties = extract::extract_dag_properties(dag);
    let task_properties = extract::extract_task_properties(task);

    // Parsed for validation only; no catalog field carries it yet
    let timestamp = execution_timestamp_millis(&context.ts)?;
    debug!(
        timestamp,
        owner = ?dag.owner,
        tags = ?dag.tags,
        inlets = inlets.len(),
        outlets = outlets.len(),
        "Execution metadata"
    );

    let service = ensure_pipeline_service(config, base_url, client).await?;
    debug!("Task properties: {:?}", task_properties);
    debug!("DAG properties: {:?}", dag_properties);

    let create_task = build_create_task(&task_properties, task_url, &service)?;
    let stored_task = client
        .create_or_update_task(&create_task)
        .await
        .with_context(|| format!("Failed to create or update task '{}'", create_task.name))?;
    info!("Created task {} ({})", stored_task.name, stored_task.id);

    let create_pipeline = CreatePipeline {
        name: dag.dag_id.clone(),
        display_name: dag.dag_id.clone(),
        description: dag.description.clone(),
        pipeline_url: dag_url,
        tasks: vec![EntityReference::task(stored_task.id)],
        service: EntityReference::pipeline_service(service.id),
    };
    let pipeline = client
        .create_or_update_pipeline(&create_pipeline)
        .await
        .with_context(|| format!("Failed to create or update pipeline '{}'", dag.dag_id))?;
    info!("Created pipeline {} ({})", pipeline.name, pipeline.id);

    Ok(())
}

/// Looks up the configured pipeline service, registering it when absent
///
/// Two reports racing here may both register; the catalog's uniqueness
/// handling decides the outcome.
async fn ensure_pipeline_service(
    config: &LineageConfig,
    base_url: &str,
    client: &dyn CatalogApi,
) -> Result<PipelineService> {
    info!("Looking up pipeline service '{}'", config.service_name);
    let existing = client
        .get_pipeline_service(&config.service_name)
        .await
        .with_context(|| format!("Failed to look up pipeline service '{}'", config.service_name))?;

    if let Some(service) = existing {
        return Ok(service);
    }

    let req = CreatePipelineService::airflow(config.service_name.clone(), base_url);
    let service = client
        .create_pipeline_service(&req)
        .await
        .with_context(|| format!("Failed to create pipeline service '{}'", req.name))?;
    info!("Pipeline service created: {} ({})", service.name, service.id);

    Ok(service)
}

fn build_create_task(
    task_properties: &AttributeMap,
    task_url: String,
    service: &PipelineService,
) -> Result<CreateTask> {
    let downstream_tasks = extract::downstream_tasks(task_properties)?;
    debug!("Downstream tasks: {:?}", downstream_tasks);

    Ok(CreateTask {
        name: extract::required_str(task_properties, "task_id")?,
        display_name: extract::required_str(task_properties, "label")?,
        description: None,
        task_url,
        upstream_tasks: Vec::new(),
        downstream_tasks,
        service: EntityReference::pipeline_service(service.id),
    })
}
