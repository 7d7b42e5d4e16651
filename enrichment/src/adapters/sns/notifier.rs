//! SNS lead notifier

use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;

use crate::domain::entities::NotificationMessage;
use crate::domain::ports::LeadNotifier;
use crate::error::NotifyError;

pub struct SnsLeadNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsLeadNotifier {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl LeadNotifier for SnsLeadNotifier {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&message.subject)
            .message(&message.body)
            .send()
            .await
            .map_err(|e| NotifyError::Rejected(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(message_id = ?output.message_id(), "Lead notification published");
        Ok(())
    }
}
