//! Shift creation collaborator
//!
//! The form never talks to the network directly; it goes through the
//! `ShiftApi` trait so tests can substitute the endpoint. The real
//! implementation POSTs the request as JSON and decodes the acknowledgment.

use futures_util::future::BoxFuture;
use reqwest::Client;
use thiserror::Error;

use super::types::{ShiftCreateRequest, ShiftRecord};

/// Errors observed when creating a shift
///
/// Variants carry plain strings so the error can travel inside GUI messages,
/// which must be cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, DNS, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("shift API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the body was not a shift record
    #[error("could not decode shift API response: {0}")]
    Decode(String),
}

/// The external create-endpoint collaborator
///
/// One call per accepted submission; resolves with the created record on
/// success and with an `ApiError` on any failure.
pub trait ShiftApi: Send + Sync {
    fn create_shift(
        &self,
        request: ShiftCreateRequest,
    ) -> BoxFuture<'static, Result<ShiftRecord, ApiError>>;
}

/// HTTP implementation of the shift API
pub struct HttpShiftClient {
    client: Client,
    base_url: String,
}

impl HttpShiftClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpShiftClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl ShiftApi for HttpShiftClient {
    fn create_shift(
        &self,
        request: ShiftCreateRequest,
    ) -> BoxFuture<'static, Result<ShiftRecord, ApiError>> {
        let client = self.client.clone();
        let url = endpoint_url(&self.base_url);

        Box::pin(async move {
            let response = client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            response
                .json::<ShiftRecord>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
    }
}

/// Build the create-endpoint URL, tolerating a trailing slash on the base
fn endpoint_url(base_url: &str) -> String {
    format!("{}/shifts", base_url.trim_end_matches('/'))
}
