//! Inbound signup event
//!
//! The identity provider invokes the handler with a user-attributes payload and
//! expects the same payload back. Only the email is read; every other field is
//! carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON pointer to the signup email inside the event payload
pub const EMAIL_POINTER: &str = "/request/userAttributes/email";

/// An opaque signup event, returned to the caller exactly as received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundEvent(Value);

impl InboundEvent {
    /// The signup email exactly as received, or `None` when the field is
    /// absent, not a string or blank
    pub fn email(&self) -> Option<&str> {
        self.0
            .pointer(EMAIL_POINTER)
            .and_then(Value::as_str)
            .filter(|email| !email.trim().is_empty())
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for InboundEvent {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}
