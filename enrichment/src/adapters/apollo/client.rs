//! Apollo enrichment API client implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use crate::domain::entities::Organization;
use crate::domain::ports::EnrichmentClient;
use crate::error::EnrichmentError;

const API_KEY_HEADER: &str = "x-api-key";

/// Implementation of the Apollo organization enrichment client
pub struct ApolloClientImpl {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApolloClientImpl {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn enrich_url(&self, domain: &str) -> String {
        self.api_url(&format!("/organizations/enrich?domain={}", encode(domain)))
    }

    fn enrich_request(&self, domain: &str) -> RequestBuilder {
        self.http
            .get(self.enrich_url(domain))
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String, EnrichmentError> {
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(map_status(status, message))
        }
    }
}

/// Map a non-success status to an error
fn map_status(status: StatusCode, message: String) -> EnrichmentError {
    match status.as_u16() {
        401 => EnrichmentError::Unauthorized,
        429 => EnrichmentError::RateLimited,
        status => EnrichmentError::Api { status, message },
    }
}

/// Response types from the Apollo API
#[derive(Deserialize)]
struct EnrichResponse {
    organization: Option<ApolloOrganizationResponse>,
}

/// Fields are kept untyped; a wrong-typed optional field reads as absent
#[derive(Deserialize)]
struct ApolloOrganizationResponse {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    primary_domain: Value,
    #[serde(default)]
    industry: Value,
    #[serde(default)]
    estimated_num_employees: Value,
    #[serde(default)]
    city: Value,
    #[serde(default)]
    country: Value,
    #[serde(default)]
    keywords: Value,
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn keywords(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(text).collect())
        .unwrap_or_default()
}

impl TryFrom<ApolloOrganizationResponse> for Organization {
    type Error = EnrichmentError;

    fn try_from(r: ApolloOrganizationResponse) -> Result<Self, Self::Error> {
        let name = text(&r.name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| EnrichmentError::Schema("organization.name missing".to_string()))?;
        let primary_domain = text(&r.primary_domain)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| {
                EnrichmentError::Schema("organization.primary_domain missing".to_string())
            })?;

        Ok(Organization {
            name,
            primary_domain,
            industry: text(&r.industry),
            estimated_num_employees: count(&r.estimated_num_employees),
            city: text(&r.city),
            country: text(&r.country),
            keywords: keywords(&r.keywords),
        })
    }
}

/// Parse an enrichment response body.
///
/// A missing or `null` organization is `Ok(None)`; a body that is not JSON of
/// the expected shape is an error.
pub fn parse_enrich_response(body: &str) -> Result<Option<Organization>, EnrichmentError> {
    let response: EnrichResponse = serde_json::from_str(body)
        .map_err(|e| EnrichmentError::Deserialization(e.to_string()))?;

    response.organization.map(Organization::try_from).transpose()
}

#[async_trait]
impl EnrichmentClient for ApolloClientImpl {
    async fn enrich_organization(
        &self,
        domain: &str,
    ) -> Result<Option<Organization>, EnrichmentError> {
        let response = self.enrich_request(domain).send().await?;

        let body = self.handle_response(response).await?;
        parse_enrich_response(&body)
    }
}
