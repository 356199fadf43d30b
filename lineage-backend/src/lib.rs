//! Lineage Backend
//!
//! Reports pipeline lineage from the host orchestrator to a metadata catalog.
//!
//! Architecture:
//! - Configuration: `lineage` section settings with defaults, reloaded per report
//! - Extraction: Allow-listed DAG and task attributes in literal notation
//! - Workflow: Pipeline service lookup-or-create, task and pipeline upserts
//! - Entry point: Best-effort reporting that logs and drops every failure
//!
//! # Example
//!
//! ```no_run
//! use lineage_backend::LineageBackend;
//! use lineage_core::host::{DagInfo, ExecutionContext, TaskInfo};
//!
//! # async fn example() {
//! let backend = LineageBackend::new();
//! let context = ExecutionContext::new(
//!     DagInfo::new("etl_daily"),
//!     TaskInfo::new("extract"),
//!     "2021-08-24T00:00:00+00:00",
//! );
//!
//! backend.send_lineage(&context.task, &[], &[], &context).await;
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod extract;
pub mod literal;
pub mod workflow;

pub use backend::{LineageBackend, guarded};
pub use config::{ConfigSource, EnvConfigSource, LineageConfig, MapConfigSource};
pub use workflow::report;
