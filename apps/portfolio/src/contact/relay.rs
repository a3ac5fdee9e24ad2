//! Form relay client: the only code that talks to the third-party form relay.
//!
//! One POST per call. No retries, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::validation::ValidContact;

pub const RELAY_URL: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("form relay access key is not configured")]
    MissingAccessKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed relay response (status {status}): {source}")]
    Malformed {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    access_key: &'a str,
}

/// Delivers a validated contact to the relay and returns its JSON reply verbatim.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn relay(&self, contact: &ValidContact) -> Result<Value, RelayError>;
}

#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
}

impl RelayClient {
    pub fn new(access_key: Option<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        Self::with_endpoint(RELAY_URL, access_key, timeout)
    }

    pub fn with_endpoint(
        endpoint: impl Into<String>,
        access_key: Option<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            access_key: access_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }
}

#[async_trait]
impl FormRelay for RelayClient {
    async fn relay(&self, contact: &ValidContact) -> Result<Value, RelayError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(RelayError::MissingAccessKey)?;

        let body = RelayRequest {
            name: contact.name(),
            email: contact.email(),
            message: contact.message(),
            access_key,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        // The relay reports rejections in the body, often with a 4xx status;
        // the body decides the outcome, not the status line.
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let payload = serde_json::from_slice(&bytes)
            .map_err(|source| RelayError::Malformed { status, source })?;

        debug!(status, "form relay responded");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::{validate, ContactInput};
    use axum::{
        http::{header::ACCEPT, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn contact() -> ValidContact {
        validate(&ContactInput {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "hi".to_string(),
        })
        .unwrap()
    }

    /// Starts a throwaway relay on localhost and returns its URL.
    async fn fake_relay(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/submit")
    }

    #[tokio::test]
    async fn test_posts_fields_and_access_key() {
        let seen = Arc::new(Mutex::new(None::<(HeaderMap, Value)>));
        let captured = seen.clone();
        let router = Router::new().route(
            "/submit",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some((headers, body));
                    Json(json!({"success": true, "message": "Email sent"}))
                }
            }),
        );
        let url = fake_relay(router).await;

        let client = RelayClient::with_endpoint(url, Some("key-123".to_string()), None).unwrap();
        let reply = client.relay(&contact()).await.unwrap();
        assert_eq!(reply["success"], true);

        let (headers, body) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["email"], "ana@example.com");
        assert_eq!(body["message"], "hi");
        assert_eq!(body["access_key"], "key-123");
    }

    #[tokio::test]
    async fn test_rejection_body_is_returned_despite_status() {
        let router = Router::new().route(
            "/submit",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "message": "Invalid access key"})),
                )
            }),
        );
        let url = fake_relay(router).await;

        let client = RelayClient::with_endpoint(url, Some("bad".to_string()), None).unwrap();
        let reply = client.relay(&contact()).await.unwrap();
        assert_eq!(reply["success"], false);
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let router = Router::new().route("/submit", post(|| async { "<html>oops</html>" }));
        let url = fake_relay(router).await;

        let client = RelayClient::with_endpoint(url, Some("key".to_string()), None).unwrap();
        let err = client.relay(&contact()).await.unwrap_err();
        assert!(matches!(err, RelayError::Malformed { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let client = RelayClient::with_endpoint("http://127.0.0.1:9/submit", None, None).unwrap();
        assert!(!client.has_access_key());
        let err = client.relay(&contact()).await.unwrap_err();
        assert!(matches!(err, RelayError::MissingAccessKey));
    }

    #[tokio::test]
    async fn test_empty_key_counts_as_missing() {
        let client = RelayClient::new(Some(String::new()), None).unwrap();
        assert!(!client.has_access_key());
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RelayClient::with_endpoint(
            format!("http://{addr}/submit"),
            Some("key".to_string()),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        let err = client.relay(&contact()).await.unwrap_err();
        assert!(matches!(err, RelayError::Http(_)));
    }
}
