//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{LeadRecord, NotificationMessage, Organization};
use crate::domain::ports::{EnrichmentClient, LeadNotifier, LeadRepository};
use crate::error::{EnrichmentError, NotifyError, StoreError};

// ============================================================================
// Mock Enrichment Client
// ============================================================================

#[derive(Default)]
pub struct MockEnrichmentClient {
    organization: Option<Organization>,
    should_fail: bool,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockEnrichmentClient {
    /// A client that finds no organization for any domain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Return this organization for every lookup
    pub fn with_organization(self, organization: Organization) -> Self {
        Self {
            organization: Some(organization),
            ..self
        }
    }

    pub fn domains_requested(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl EnrichmentClient for MockEnrichmentClient {
    async fn enrich_organization(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, EnrichmentError> {
        self.requested.write().unwrap().push(domain.to_string());

        if self.should_fail {
            return Err(EnrichmentError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        Ok(self.organization.clone())
    }
}

// ============================================================================
// In-Memory Lead Repository
// ============================================================================

/// Records every put in order, so repeated writes of one id stay visible
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<Vec<LeadRecord>>>,
    should_fail: bool,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn all(&self) -> Vec<LeadRecord> {
        self.leads.read().unwrap().clone()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn put(&self, lead: &LeadRecord) -> Result<(), StoreError> {
        if self.should_fail {
            return Err(StoreError::Rejected(
                "ResourceNotFoundException: table not found".to_string(),
            ));
        }

        self.leads.write().unwrap().push(lead.clone());
        Ok(())
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Arc<RwLock<Vec<NotificationMessage>>>,
    should_fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<NotificationMessage> {
        self.messages.read().unwrap().clone()
    }
}

#[async_trait]
impl LeadNotifier for RecordingNotifier {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        if self.should_fail {
            return Err(NotifyError::Rejected("AuthorizationError".to_string()));
        }

        self.messages.write().unwrap().push(message.clone());
        Ok(())
    }
}
