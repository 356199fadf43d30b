//! Attribute extraction
//!
//! Builds string-keyed attribute maps for a DAG and a task. Each entity kind
//! has a fixed table of allowed fields, each paired with a function reading
//! that field from the typed snapshot. The orchestrator's own serialized
//! value wins when it has one; otherwise the typed field is used. Values are
//! rendered in literal notation (see [`crate::literal`]).

use lineage_core::host::{DagInfo, TaskInfo};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::literal::{self, DecodeError};

/// Extracted attributes, keyed by field name
pub type AttributeMap = BTreeMap<String, String>;

/// Reads one field from a snapshot; `None` when the object does not declare it
type FieldReader<T> = fn(&T) -> Option<Value>;

/// Task fields reported to the catalog
pub const TASK_FIELDS: &[(&str, FieldReader<TaskInfo>)] = &[
    ("_downstream_task_ids", |t| {
        Some(Value::from(t.downstream_task_ids.clone()))
    }),
    ("_inlets", |t| Some(Value::from(t.inlets.clone()))),
    ("_outlets", |t| Some(Value::from(t.outlets.clone()))),
    ("_task_type", |t| Some(Value::from(t.task_type.clone()))),
    ("_task_module", |t| Some(Value::from(t.task_module.clone()))),
    ("depends_on_past", |t| Some(Value::from(t.depends_on_past))),
    ("email", |t| Some(t.email.clone().unwrap_or(Value::Null))),
    ("label", |t| Some(Value::from(t.display_label()))),
    ("execution_timeout", |t| Some(Value::from(t.execution_timeout))),
    ("end_date", |t| {
        Some(Value::from(t.end_date.map(|d| d.to_rfc3339())))
    }),
    ("start_date", |t| {
        Some(Value::from(t.start_date.map(|d| d.to_rfc3339())))
    }),
    ("sla", |t| Some(Value::from(t.sla))),
    ("sql", |t| t.sql.clone().map(Value::String)),
    ("task_id", |t| Some(Value::from(t.task_id.as_str()))),
    ("trigger_rule", |t| Some(Value::from(t.trigger_rule.clone()))),
    ("wait_for_downstream", |t| Some(Value::from(t.wait_for_downstream))),
];

/// DAG fields reported to the catalog
pub const DAG_FIELDS: &[(&str, FieldReader<DagInfo>)] = &[
    ("_access_control", |d| {
        Some(d.access_control.clone().unwrap_or(Value::Null))
    }),
    ("_concurrency", |d| Some(Value::from(d.concurrency))),
    ("_default_view", |d| Some(Value::from(d.default_view.clone()))),
    ("catchup", |d| Some(Value::from(d.catchup))),
    ("fileloc", |d| Some(Value::from(d.fileloc.clone()))),
    ("is_paused_upon_creation", |d| {
        Some(Value::from(d.is_paused_upon_creation))
    }),
    ("start_date", |d| {
        Some(Value::from(d.start_date.map(|s| s.to_rfc3339())))
    }),
    ("tags", |d| Some(Value::from(d.tags.clone()))),
    ("timezone", |d| Some(Value::from(d.timezone.clone()))),
];

/// Errors raised while reading extracted attributes back
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("attribute '{0}' missing from extracted properties")]
    MissingKey(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn extract<T>(
    object: &T,
    serialized: &Map<String, Value>,
    fields: &[(&str, FieldReader<T>)],
) -> AttributeMap {
    fields
        .iter()
        .filter_map(|(name, read)| {
            serialized
                .get(*name)
                .cloned()
                .or_else(|| read(object))
                .map(|value| (name.to_string(), literal::render(&value)))
        })
        .collect()
}

/// Extracts the allowed task attributes
pub fn extract_task_properties(task: &TaskInfo) -> AttributeMap {
    extract(task, &task.serialized, TASK_FIELDS)
}

/// Extracts the allowed DAG attributes
pub fn extract_dag_properties(dag: &DagInfo) -> AttributeMap {
    extract(dag, &dag.serialized, DAG_FIELDS)
}

/// Reads a string attribute back into plain text
pub fn required_str(properties: &AttributeMap, key: &str) -> Result<String, ExtractError> {
    let raw = properties
        .get(key)
        .ok_or_else(|| ExtractError::MissingKey(key.to_string()))?;
    Ok(literal::decode_str(raw)?)
}

/// Downstream task ids; empty when the attribute was not extracted or is `None`
pub fn downstream_tasks(properties: &AttributeMap) -> Result<Vec<String>, ExtractError> {
    match properties.get("_downstream_task_ids") {
        Some(raw) if raw.trim() == literal::NONE => Ok(Vec::new()),
        Some(raw) => Ok(literal::decode_str_list(raw)?),
        None => Ok(Vec::new()),
    }
}
