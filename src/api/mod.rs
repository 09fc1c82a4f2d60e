//! HTTP client for the storefront backend.
//!
//! The backend wraps successful payloads in `{ "data": ... }` and failures in
//! `{ "meta": { "message" } }`; [`StorefrontClient`] unwraps both so callers
//! deal in typed models and [`CheckoutError`] only.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::CheckoutError;
use crate::models::MetaEnvelope;

mod auth;
mod cart;
mod orders;
mod products;

/// Typed client over the storefront REST API.
///
/// Authentication rides on the backend's session cookie, so the underlying
/// `reqwest` client keeps a cookie store.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(config: &ClientConfig) -> Result<Self, CheckoutError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Decode a success body, or turn an error status into
    /// [`CheckoutError::Api`] carrying the backend's `meta.message` when the
    /// envelope provides one.
    async fn expect_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, CheckoutError> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body).map_err(CheckoutError::from);
        }

        Err(Self::error_from_status(status, response).await)
    }

    async fn error_from_status(status: StatusCode, response: Response) -> CheckoutError {
        let message = match response.json::<MetaEnvelope>().await {
            Ok(envelope) => envelope.meta.message,
            Err(e) => {
                debug!(error = %e, "error body was not a meta envelope");
                None
            }
        };
        let message = message.unwrap_or_else(|| {
            warn!(%status, "backend error without a message envelope");
            format!(
                "Request failed: {}",
                status.canonical_reason().unwrap_or("unknown error")
            )
        });

        CheckoutError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
