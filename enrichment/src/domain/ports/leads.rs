//! Lead store and notification port traits

use async_trait::async_trait;

use crate::domain::entities::{LeadRecord, NotificationMessage};
use crate::error::{NotifyError, StoreError};

/// Port trait for persisting leads
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Write one lead, keyed by its id
    async fn put(&self, lead: &LeadRecord) -> Result<(), StoreError>;
}

/// Port trait for announcing new leads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    /// Publish one message to the configured channel
    async fn publish(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}
