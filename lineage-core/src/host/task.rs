//! Task snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of a task (operator instance) as seen by the host orchestrator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInfo {
    pub task_id: String,

    /// Display label; the host uses the task id when none is set
    #[serde(default)]
    pub label: Option<String>,

    /// Operator class name
    #[serde(default)]
    pub task_type: Option<String>,

    /// Module the operator class lives in
    #[serde(default)]
    pub task_module: Option<String>,

    #[serde(default)]
    pub downstream_task_ids: Vec<String>,

    #[serde(default)]
    pub inlets: Vec<Value>,

    #[serde(default)]
    pub outlets: Vec<Value>,

    #[serde(default)]
    pub depends_on_past: Option<bool>,

    /// Single address or list of addresses
    #[serde(default)]
    pub email: Option<Value>,

    /// Seconds
    #[serde(default)]
    pub execution_timeout: Option<f64>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// Seconds
    #[serde(default)]
    pub sla: Option<f64>,

    /// Only SQL operators declare this
    #[serde(default)]
    pub sql: Option<String>,

    #[serde(default)]
    pub trigger_rule: Option<String>,

    #[serde(default)]
    pub wait_for_downstream: Option<bool>,

    /// The orchestrator's canonical serialized fields, keyed by field name
    #[serde(default)]
    pub serialized: Map<String, Value>,
}

impl TaskInfo {
    /// Creates a snapshot with only the task id set
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Default::default()
        }
    }

    /// Label shown in the orchestrator UI
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.task_id)
    }
}
