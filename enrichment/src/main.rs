//! Enterprise lead enrichment handler
//!
//! Post-signup hook for the identity provider: enriches a new user's email
//! domain with company data and records qualifying companies as sales leads.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::{ApolloClientImpl, DynamoLeadRepository, SnsLeadNotifier};
use app::EnrichmentService;
use config::Config;
use domain::entities::InboundEvent;

type LeadEnrichmentService =
    EnrichmentService<ApolloClientImpl, DynamoLeadRepository, SnsLeadNotifier>;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing; the Lambda log sink adds its own timestamps
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lead_enrichment=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false),
        )
        .init();

    tracing::info!("Starting lead enrichment handler...");

    // Load configuration
    let config = Config::from_env()?;

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await;

    // Create adapters
    let enrichment = Arc::new(ApolloClientImpl::new(
        config.apollo_api_url.clone(),
        config.apollo_api_key.clone(),
    ));
    let leads = Arc::new(DynamoLeadRepository::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.lead_table_name.clone(),
    ));
    let notifier = Arc::new(SnsLeadNotifier::new(
        aws_sdk_sns::Client::new(&sdk_config),
        config.sns_topic_arn.clone(),
    ));

    let service: Arc<LeadEnrichmentService> =
        Arc::new(EnrichmentService::new(enrichment, leads, notifier));

    tracing::info!(table = %config.lead_table_name, "Handler ready");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let service = Arc::clone(&service);
        async move {
            let event = InboundEvent::from(event.payload);
            Ok::<Value, lambda_runtime::Error>(service.handle(event).await.into_inner())
        }
    }))
    .await
}
