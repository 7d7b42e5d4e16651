use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_APOLLO_API_URL: &str = "https://api.apollo.io";
pub const DEFAULT_LEAD_TABLE_NAME: &str = "EnterpriseSalesLead";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Apollo API key, sent as `x-api-key`
    pub apollo_api_key: String,
    /// Base URL for the Apollo API (overridable for local testing)
    pub apollo_api_url: String,
    /// DynamoDB table that receives lead records
    pub lead_table_name: String,
    /// SNS topic that receives one message per qualifying lead
    pub sns_topic_arn: String,
    pub aws_region: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            apollo_api_key: var("APOLLO_API_KEY").context("APOLLO_API_KEY must be set")?,
            apollo_api_url: var("APOLLO_API_URL")
                .unwrap_or_else(|| DEFAULT_APOLLO_API_URL.to_string()),
            lead_table_name: var("DYNAMO_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_LEAD_TABLE_NAME.to_string()),
            sns_topic_arn: var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN must be set")?,
            aws_region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
        })
    }
}
