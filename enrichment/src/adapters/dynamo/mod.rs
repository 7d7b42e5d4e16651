//! DynamoDB adapter
//!
//! Lead persistence backed by a DynamoDB table.

pub mod lead_repo;

pub use lead_repo::DynamoLeadRepository;
