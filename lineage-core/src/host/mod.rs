//! Host orchestrator snapshot types
//!
//! The orchestrator hands the lineage backend a snapshot of the DAG and the
//! task that just finished. Each snapshot carries the typed attributes the
//! backend knows about plus the orchestrator's own serialized-field map,
//! which takes precedence when both are present.

pub mod context;
pub mod dag;
pub mod task;

pub use context::ExecutionContext;
pub use dag::DagInfo;
pub use task::TaskInfo;
