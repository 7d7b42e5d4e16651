//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use serde_json::json;

use crate::domain::entities::{InboundEvent, Organization};

/// Create a test organization that does not qualify as a lead
pub fn test_organization() -> Organization {
    Organization {
        name: "Acme".to_string(),
        primary_domain: "acme.io".to_string(),
        industry: Some("computer software".to_string()),
        estimated_num_employees: Some(42),
        city: Some("Austin".to_string()),
        country: Some("United States".to_string()),
        keywords: vec!["saas".to_string(), "b2b".to_string()],
    }
}

/// Create a test organization carrying the qualifying keyword
pub fn video_editing_organization() -> Organization {
    Organization {
        industry: Some("media production".to_string()),
        keywords: vec![
            "post production".to_string(),
            "video editing".to_string(),
        ],
        ..test_organization()
    }
}

/// Create a post-confirmation signup event for an email
pub fn signup_event(email: &str) -> InboundEvent {
    InboundEvent::from(json!({
        "version": "1",
        "triggerSource": "PostConfirmation_ConfirmSignUp",
        "region": "us-east-1",
        "userPoolId": "us-east-1_test",
        "userName": "jane",
        "request": {
            "userAttributes": {
                "sub": "0f3c2b4a-1111-2222-3333-444455556666",
                "email_verified": "true",
                "email": email
            }
        },
        "response": {}
    }))
}

/// Create a signup event without an email attribute
pub fn event_without_email() -> InboundEvent {
    InboundEvent::from(json!({
        "version": "1",
        "triggerSource": "PostConfirmation_ConfirmSignUp",
        "request": { "userAttributes": { "sub": "0f3c2b4a" } },
        "response": {}
    }))
}
