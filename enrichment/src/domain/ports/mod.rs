//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod enrichment;
pub mod leads;

pub use enrichment::EnrichmentClient;
#[cfg(test)]
pub use leads::MockLeadNotifier;
pub use leads::{LeadNotifier, LeadRepository};
