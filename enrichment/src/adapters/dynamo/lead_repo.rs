//! DynamoDB lead repository

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::domain::entities::LeadRecord;
use crate::domain::ports::LeadRepository;
use crate::error::StoreError;

pub struct DynamoLeadRepository {
    client: Client,
    table_name: String,
}

impl DynamoLeadRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

/// Convert a lead into a DynamoDB item
///
/// `Employees` becomes a number attribute, everything else a string attribute.
pub fn lead_to_item(lead: &LeadRecord) -> Result<HashMap<String, AttributeValue>, StoreError> {
    serde_dynamo::to_item(lead).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[async_trait]
impl LeadRepository for DynamoLeadRepository {
    async fn put(&self, lead: &LeadRecord) -> Result<(), StoreError> {
        let item = lead_to_item(lead)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StoreError::Rejected(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(lead_id = %lead.id, table = %self.table_name, "Lead written");
        Ok(())
    }
}
