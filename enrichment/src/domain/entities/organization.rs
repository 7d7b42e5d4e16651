//! Organization entity
//!
//! The company profile returned by the enrichment API for an email domain.
//! Only lives for the duration of one invocation.

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub name: String,
    pub primary_domain: String,
    pub industry: Option<String>,
    pub estimated_num_employees: Option<u64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub keywords: Vec<String>,
}

impl Organization {
    /// Whether the keyword list contains `keyword` as an exact, case-sensitive entry
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Employee count, with `0` treated as unknown
    pub fn known_employee_count(&self) -> Option<u64> {
        self.estimated_num_employees.filter(|&n| n > 0)
    }
}
