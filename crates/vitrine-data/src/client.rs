//! Storefront API client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use vitrine_core::LocaleContext;
use vitrine_queries::{QueryTemplate, QueryVariables};

use crate::error::ApiError;

/// The API client boundary: execute a catalog query with variables and get
/// the decoded `data` member back.
///
/// Implementations must not cache or retry; failures surface to the caller
/// unchanged. The trait is object-safe so loaders can hold `Rc<dyn
/// StorefrontApi>` and hand clones to deferred slots.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// Execute a query template with the given variables.
    async fn query(
        &self,
        template: &QueryTemplate,
        variables: QueryVariables,
    ) -> Result<Value, ApiError>;
}

/// GraphQL-over-HTTP client for the Storefront API.
pub struct StorefrontClient {
    endpoint: String,
    access_token: Option<String>,
    locale: LocaleContext,
}

#[derive(Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl StorefrontClient {
    /// Create a client for the given endpoint and negotiated locale.
    pub fn new(endpoint: impl Into<String>, locale: LocaleContext) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: None,
            locale,
        }
    }

    /// Attach a storefront access token sent with every request.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Build the JSON request body for a query, injecting `country` and
    /// `language` unless the caller already set them.
    pub fn request_body(
        &self,
        template: &QueryTemplate,
        variables: QueryVariables,
    ) -> Result<Vec<u8>, ApiError> {
        let variables = variables
            .ensure("country", self.locale.country.clone())
            .ensure("language", self.locale.language.clone());

        let body = serde_json::json!({
            "query": template.compose(),
            "variables": variables,
        });
        serde_json::to_vec(&body).map_err(|e| ApiError::Request(e.to_string()))
    }

    /// Decode a GraphQL response envelope into its `data` member.
    pub fn decode_response(&self, bytes: &[u8]) -> Result<Value, ApiError> {
        let envelope: GraphQlEnvelope = serde_json::from_slice(bytes)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(ApiError::Backend(messages.join("; ")));
            }
        }

        envelope
            .data
            .ok_or_else(|| ApiError::Backend("response missing data".to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, body: Vec<u8>) -> Result<Value, ApiError> {
        let mut builder = spin_sdk::http::Request::builder();
        builder
            .method(spin_sdk::http::Method::Post)
            .uri(&self.endpoint)
            .header("content-type", "application/json")
            .header("accept", "application/json");
        if let Some(token) = &self.access_token {
            builder.header("x-storefront-access-token", token);
        }
        let request = builder.body(body).build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if *status >= 400 {
            return Err(ApiError::Http {
                status: *status,
                url: self.endpoint.clone(),
            });
        }

        self.decode_response(response.body())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, _body: Vec<u8>) -> Result<Value, ApiError> {
        Err(ApiError::Request(
            "storefront transport requires the wasm32 target".to_string(),
        ))
    }
}

#[async_trait(?Send)]
impl StorefrontApi for StorefrontClient {
    async fn query(
        &self,
        template: &QueryTemplate,
        variables: QueryVariables,
    ) -> Result<Value, ApiError> {
        let body = self.request_body(template, variables)?;
        self.send(body).await
    }
}
