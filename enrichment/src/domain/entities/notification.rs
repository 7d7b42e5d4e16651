//! Notification message sent for each new lead

use super::LeadRecord;

/// SNS rejects subjects of 100 characters or more
pub const MAX_SUBJECT_CHARS: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn for_lead(lead: &LeadRecord) -> Self {
        let subject: String = format!("🎯 New Lead: {}", lead.company_name)
            .chars()
            .take(MAX_SUBJECT_CHARS)
            .collect();

        let employees = match lead.employees {
            0 => "?".to_string(),
            n => n.to_string(),
        };

        let body = format!(
            "New company signup matched lead criteria:\n\n\
             Company: {}\n\
             Domain: {}\n\
             Industry: {}\n\
             Employees: {}\n\
             Email: {}",
            lead.company_name, lead.domain, lead.industry, employees, lead.email
        );

        Self { subject, body }
    }
}
