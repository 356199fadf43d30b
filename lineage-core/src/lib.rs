//! Lineage Core
//!
//! Core types shared by the lineage reporting crates.
//!
//! This crate contains:
//! - Domain types: Catalog entities (PipelineService, Task, Pipeline, EntityReference)
//! - DTOs: Creation payloads sent to the catalog API
//! - Host types: Snapshots of the orchestrator's DAG, task and execution context

pub mod domain;
pub mod dto;
pub mod host;
