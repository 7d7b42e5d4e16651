//! Enrichment service
//!
//! Runs the post-signup pipeline for one event: extract the email, skip
//! free-mail domains, look the company up, and record and announce it when it
//! qualifies as a lead.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{InboundEvent, LeadId, LeadRecord, NotificationMessage};
use crate::domain::policy::{email_domain, is_free_mail_domain, is_qualified_lead};
use crate::domain::ports::{EnrichmentClient, LeadNotifier, LeadRepository};
use crate::error::AppError;

/// Why an event ended the pipeline without producing a lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingEmail,
    FreeMailDomain(String),
    NoOrganization(String),
    KeywordNotMatched(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingEmail => write!(f, "missing email"),
            SkipReason::FreeMailDomain(d) => write!(f, "free email domain {}", d),
            SkipReason::NoOrganization(d) => write!(f, "no organization data for {}", d),
            SkipReason::KeywordNotMatched(d) => write!(f, "industry not matched for {}", d),
        }
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    Skipped(SkipReason),
    LeadCreated { lead_id: LeadId },
}

/// Service for enriching signups into sales leads
pub struct EnrichmentService<EC, LR, LN>
where
    EC: EnrichmentClient,
    LR: LeadRepository,
    LN: LeadNotifier,
{
    enrichment: Arc<EC>,
    leads: Arc<LR>,
    notifier: Arc<LN>,
}

impl<EC, LR, LN> EnrichmentService<EC, LR, LN>
where
    EC: EnrichmentClient,
    LR: LeadRepository,
    LN: LeadNotifier,
{
    pub fn new(enrichment: Arc<EC>, leads: Arc<LR>, notifier: Arc<LN>) -> Self {
        Self {
            enrichment,
            leads,
            notifier,
        }
    }

    /// Handle one signup event.
    ///
    /// Never fails: every error is logged and the event is handed back
    /// unchanged so the signup itself is never blocked.
    pub async fn handle(&self, event: InboundEvent) -> InboundEvent {
        match self.process(&event).await {
            Ok(EnrichmentOutcome::Skipped(reason)) => {
                tracing::info!(%reason, "Skipping lead creation");
            }
            Ok(EnrichmentOutcome::LeadCreated { lead_id }) => {
                tracing::info!(%lead_id, "Lead stored and notification sent");
            }
            Err(e) if e.is_downstream() => {
                tracing::error!(kind = e.kind(), error = %e, "Error in enrichment");
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Rejected signup event");
            }
        }

        event
    }

    /// Run the pipeline and report how it ended.
    ///
    /// The store write always completes before the notification is published;
    /// a failed write means no notification.
    pub async fn process(&self, event: &InboundEvent) -> Result<EnrichmentOutcome, AppError> {
        let Some(email) = event.email() else {
            return Ok(EnrichmentOutcome::Skipped(SkipReason::MissingEmail));
        };

        let domain = email_domain(email)?;
        if is_free_mail_domain(&domain) {
            return Ok(EnrichmentOutcome::Skipped(SkipReason::FreeMailDomain(
                domain,
            )));
        }

        tracing::debug!(%domain, "Enriching signup domain");
        let Some(org) = self.enrichment.enrich_organization(&domain).await? else {
            return Ok(EnrichmentOutcome::Skipped(SkipReason::NoOrganization(
                domain,
            )));
        };

        if !is_qualified_lead(&org) {
            return Ok(EnrichmentOutcome::Skipped(SkipReason::KeywordNotMatched(
                domain,
            )));
        }

        let lead = LeadRecord::new(&org, email, Utc::now());
        self.leads.put(&lead).await?;

        let message = NotificationMessage::for_lead(&lead);
        self.notifier.publish(&message).await?;

        Ok(EnrichmentOutcome::LeadCreated { lead_id: lead.id })
    }
}
