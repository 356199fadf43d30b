//! Data Transfer Objects for the catalog API
//!
//! Creation payloads assembled by the lineage backend and sent to the
//! catalog. Field names follow the catalog's camelCase JSON schema.

pub mod pipeline;
pub mod pipeline_service;
pub mod task;
