//! Apollo adapter
//!
//! HTTP client for the Apollo organization enrichment API.

pub mod client;

pub use client::ApolloClientImpl;
