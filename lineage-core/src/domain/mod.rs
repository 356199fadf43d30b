//! Catalog domain types
//!
//! These types mirror the records persisted by the metadata catalog. The
//! catalog owns them; lineage reporting only reads back what it created.

pub mod entity_reference;
pub mod pipeline;
pub mod pipeline_service;
pub mod task;
