//! SNS adapter
//!
//! Lead notifications published to an SNS topic.

pub mod notifier;

pub use notifier::SnsLeadNotifier;
