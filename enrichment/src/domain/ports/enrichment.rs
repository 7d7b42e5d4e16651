//! Enrichment client port trait
//!
//! Defines the interface for looking up company data by email domain.

use async_trait::async_trait;

use crate::domain::entities::Organization;
use crate::error::EnrichmentError;

/// Port trait for company enrichment lookups
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    /// Look up the organization behind a domain.
    ///
    /// `Ok(None)` means the lookup succeeded but the API knows no organization.
    async fn enrich_organization(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, EnrichmentError>;
}
