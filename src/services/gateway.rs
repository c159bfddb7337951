//! GraphQL Gateway
//!
//! Thin reqwest client for the backend's GraphQL endpoint. Responses are
//! decoded into explicit types at this boundary.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    query: &'a str,
    variables: &'a V,
}

/// Error entry in a GraphQL response
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// Decode a response body, turning reported errors into [`Error::Backend`]
pub fn decode_response(body: &str) -> Result<serde_json::Value> {
    let response: GraphqlResponse = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        let message = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Backend { message });
    }
    response.data.ok_or_else(|| Error::Backend {
        message: "response carried neither data nor errors".to_string(),
    })
}

/// Read `data.<field>` as a typed list
pub fn extract_list<T: DeserializeOwned>(mut data: serde_json::Value, field: &str) -> Result<Vec<T>> {
    match data.get_mut(field).map(serde_json::Value::take) {
        Some(serde_json::Value::Null) | None => Err(Error::Backend {
            message: format!("response is missing field {field}"),
        }),
        Some(list) => Ok(serde_json::from_value(list)?),
    }
}

/// Client for the backend GraphQL endpoint
#[derive(Clone)]
pub struct GraphqlGateway {
    http: reqwest::Client,
    endpoint: Arc<str>,
    token: Option<Arc<str>>,
}

impl GraphqlGateway {
    /// Build a gateway from the application config
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            endpoint: config.graphql_url().into(),
            token: None,
        })
    }

    /// Send requests with a bearer token
    pub fn with_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one operation and return its `data` object
    pub async fn execute<V: Serialize>(
        &self,
        operation_name: &str,
        query: &str,
        variables: &V,
    ) -> Result<serde_json::Value> {
        tracing::debug!(operation = operation_name, endpoint = %self.endpoint, "GraphQL request");

        let mut request = self.http.post(&*self.endpoint).json(&GraphqlRequest {
            operation_name,
            query,
            variables,
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(operation = operation_name, %status, "GraphQL request failed");
            return Err(Error::Backend {
                message: format!("{operation_name} returned HTTP {status}"),
            });
        }
        decode_response(&body)
    }
}

impl std::fmt::Debug for GraphqlGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlGateway")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Firm;

    #[test]
    fn test_decode_data() {
        let data = decode_response(r#"{"data":{"getFirms":[{"id":"f1","name":"Acme"}]}}"#)
            .expect("data");
        let firms: Vec<Firm> = extract_list(data, "getFirms").expect("firms");
        assert_eq!(firms.len(), 1);
        assert_eq!(firms[0].name, "Acme");
    }

    #[test]
    fn test_errors_become_backend_error() {
        let result = decode_response(
            r#"{"data":null,"errors":[{"message":"Not authorized"},{"message":"again"}]}"#,
        );
        match result {
            Err(Error::Backend { message }) => assert_eq!(message, "Not authorized; again"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field() {
        let data = decode_response(r#"{"data":{"getFirms":null}}"#).expect("data");
        assert!(matches!(
            extract_list::<Firm>(data, "getFirms"),
            Err(Error::Backend { .. })
        ));
    }

    #[test]
    fn test_malformed_item_rejected() {
        let data = decode_response(r#"{"data":{"getFirms":[{"id":"f1"}]}}"#).expect("data");
        assert!(matches!(
            extract_list::<Firm>(data, "getFirms"),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_gateway_endpoint() {
        let config = AppConfig {
            backend_host: "http://backend:4000/".into(),
            ..AppConfig::default()
        };
        let gateway = GraphqlGateway::new(&config).expect("gateway");
        assert_eq!(gateway.endpoint(), "http://backend:4000/graphql");
    }
}
