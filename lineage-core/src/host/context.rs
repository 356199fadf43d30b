//! Execution context handed to lineage hooks

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::dag::DagInfo;
use crate::host::task::TaskInfo;

/// Context of a finished task instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub dag: DagInfo,
    pub task: TaskInfo,

    /// Logical execution timestamp as rendered by the orchestrator
    pub ts: String,

    #[serde(default)]
    pub run_id: Option<String>,

    /// Remaining context entries the backend does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ExecutionContext {
    pub fn new(dag: DagInfo, task: TaskInfo, ts: impl Into<String>) -> Self {
        Self {
            dag,
            task,
            ts: ts.into(),
            run_id: None,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entries_land_in_extra() {
        let ctx: ExecutionContext = serde_json::from_value(serde_json::json!({
            "dag": { "dag_id": "etl_daily" },
            "task": { "task_id": "extract" },
            "ts": "2021-08-24T00:00:00+00:00",
            "run_id": "scheduled__2021-08-24T00:00:00+00:00",
            "try_number": 1
        }))
        .unwrap();

        assert_eq!(ctx.dag.dag_id, "etl_daily");
        assert_eq!(ctx.task.task_id, "extract");
        assert_eq!(ctx.extra.get("try_number"), Some(&serde_json::json!(1)));
    }
}
