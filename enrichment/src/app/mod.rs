//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod enrichment_service;

pub use enrichment_service::EnrichmentService;
