//! Lead domain entity
//!
//! A qualifying signup, persisted once per invocation and never updated.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::Organization;

/// Placeholder stored for missing text attributes
pub const UNKNOWN: &str = "unknown";

/// Lead identifier: `<primary_domain>-<unix millis>`
///
/// Two signups for the same domain within one millisecond collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn new(primary_domain: &str, created_at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}-{}",
            primary_domain,
            created_at.timestamp_millis()
        ))
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lead record, shaped like the stored item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeadRecord {
    #[serde(rename = "ID")]
    pub id: LeadId,
    pub company_name: String,
    pub domain: String,
    pub industry: String,
    pub email: String,
    pub employees: u64,
    pub city: String,
    pub country: String,
    /// RFC 3339 UTC, millisecond precision
    pub timestamp: String,
}

impl LeadRecord {
    pub fn new(org: &Organization, email: &str, created_at: DateTime<Utc>) -> Self {
        let or_unknown = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string()
        };

        Self {
            id: LeadId::new(&org.primary_domain, created_at),
            company_name: org.name.clone(),
            domain: org.primary_domain.clone(),
            industry: or_unknown(&org.industry),
            email: email.to_string(),
            employees: org.known_employee_count().unwrap_or(0),
            city: or_unknown(&org.city),
            country: or_unknown(&org.country),
            timestamp: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_organization;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_760_000_000_123).unwrap()
    }

    #[test]
    fn id_is_domain_and_millis() {
        let id = LeadId::new("acme.io", fixed_time());
        assert_eq!(id.to_string(), "acme.io-1760000000123");
    }

    #[test]
    fn record_copies_organization_fields() {
        let org = Organization {
            name: "Acme".to_string(),
            primary_domain: "acme.io".to_string(),
            industry: Some("media".to_string()),
            estimated_num_employees: Some(250),
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            keywords: vec!["video editing".to_string()],
        };

        let lead = LeadRecord::new(&org, "jane@acme.io", fixed_time());

        assert_eq!(lead.id.0, "acme.io-1760000000123");
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.domain, "acme.io");
        assert_eq!(lead.industry, "media");
        assert_eq!(lead.email, "jane@acme.io");
        assert_eq!(lead.employees, 250);
        assert_eq!(lead.city, "Berlin");
        assert_eq!(lead.country, "Germany");
        assert_eq!(lead.timestamp, "2025-10-09T08:53:20.123Z");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let org = Organization {
            industry: None,
            estimated_num_employees: None,
            city: None,
            country: Some(String::new()),
            ..test_organization()
        };

        let lead = LeadRecord::new(&org, "jane@acme.io", fixed_time());

        assert_eq!(lead.industry, UNKNOWN);
        assert_eq!(lead.employees, 0);
        assert_eq!(lead.city, UNKNOWN);
        assert_eq!(lead.country, UNKNOWN);
    }

    #[test]
    fn serializes_with_store_attribute_names() {
        let lead = LeadRecord::new(&test_organization(), "jane@acme.io", fixed_time());
        let value = serde_json::to_value(&lead).unwrap();

        for key in [
            "ID",
            "CompanyName",
            "Domain",
            "Industry",
            "Email",
            "Employees",
            "City",
            "Country",
            "Timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing attribute {}", key);
        }
    }
}
