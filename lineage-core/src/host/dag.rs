//! DAG snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of a DAG as seen by the host orchestrator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DagInfo {
    pub dag_id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Role name to permission set
    #[serde(default)]
    pub access_control: Option<Value>,

    #[serde(default)]
    pub concurrency: Option<u32>,

    #[serde(default)]
    pub default_view: Option<String>,

    #[serde(default)]
    pub catchup: Option<bool>,

    /// Path of the file the DAG was loaded from
    #[serde(default)]
    pub fileloc: Option<String>,

    #[serde(default)]
    pub is_paused_upon_creation: Option<bool>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub timezone: Option<String>,

    /// The orchestrator's canonical serialized fields, keyed by field name
    #[serde(default)]
    pub serialized: Map<String, Value>,
}

impl DagInfo {
    /// Creates a snapshot with only the DAG id set
    pub fn new(dag_id: impl Into<String>) -> Self {
        Self {
            dag_id: dag_id.into(),
            ..Default::default()
        }
    }
}
