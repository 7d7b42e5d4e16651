//! Domain entities
//!
//! Core business objects representing the enrichment domain.

pub mod event;
pub mod lead;
pub mod notification;
pub mod organization;

pub use event::InboundEvent;
pub use lead::{LeadId, LeadRecord};
pub use notification::NotificationMessage;
pub use organization::Organization;
