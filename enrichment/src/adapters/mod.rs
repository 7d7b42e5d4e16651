//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod apollo;
pub mod dynamo;
pub mod sns;

pub use apollo::ApolloClientImpl;
pub use dynamo::DynamoLeadRepository;
pub use sns::SnsLeadNotifier;
