//! Lead qualification rules
//!
//! Which signups are worth enriching, and which organizations count as leads.

use crate::domain::entities::Organization;
use crate::error::AppError;

/// Consumer mail providers; signups from these domains are never enriched
pub const FREE_MAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "icloud.com",
    "hotmail.com",
];

/// Keyword an organization must carry to qualify as a lead
pub const REQUIRED_KEYWORD: &str = "video editing";

/// Extract the lower-cased domain from an email address.
///
/// The domain is whatever follows the last `@`, so quoted local parts
/// containing `@` still resolve to the real domain.
pub fn email_domain(email: &str) -> Result<String, AppError> {
    let (_, domain) = email
        .rsplit_once('@')
        .ok_or_else(|| AppError::InvalidInput(format!("email has no domain: {}", email)))?;

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "email has an empty domain: {}",
            email
        )));
    }

    Ok(domain.to_lowercase())
}

pub fn is_free_mail_domain(domain: &str) -> bool {
    FREE_MAIL_DOMAINS.contains(&domain)
}

pub fn is_qualified_lead(org: &Organization) -> bool {
    org.has_keyword(REQUIRED_KEYWORD)
}
