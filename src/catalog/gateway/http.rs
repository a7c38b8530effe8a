//! reqwest-backed implementation of the product gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use super::ProductGateway;
use crate::catalog::error::CatalogError;
use crate::catalog::models::{Product, ProductId, StatusUpdate, TransitionStatus};

const PRODUCTS_SEGMENT: &str = "products";
const MAX_ERROR_BODY_CHARS: usize = 160;

/// Product gateway talking to the REST backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    client: Client,
    products_url: Url,
}

impl HttpProductGateway {
    /// Creates a gateway rooted at `base_url` (e.g. `http://localhost:3001`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] when the URL cannot be parsed
    /// or is not an HTTP(S) URL, and [`CatalogError::Configuration`] when the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let products_url = products_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| CatalogError::Configuration {
                message: format!("failed to configure catalog HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            products_url,
        })
    }

    /// Returns the collection endpoint, `{base_url}/products`.
    #[must_use]
    pub const fn products_url(&self) -> &Url {
        &self.products_url
    }

    fn product_url(&self, id: &ProductId) -> Result<Url, CatalogError> {
        let mut url = self.products_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl {
                message: format!("'{}' cannot carry a path", self.products_url),
            })?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(self.products_url.clone())
            .send()
            .await
            .map_err(|error| map_transport_error("list products", &error))?;

        let body = read_success_body("list products", response).await?;
        serde_json::from_str(&body).map_err(|error| CatalogError::Decode {
            message: format!("product list: {error}"),
        })
    }

    async fn update_status(
        &self,
        id: &ProductId,
        status: TransitionStatus,
    ) -> Result<(), CatalogError> {
        let url = self.product_url(id)?;
        let operation = format!("update product {id}");
        let response = self
            .client
            .put(url)
            .json(&StatusUpdate { status })
            .send()
            .await
            .map_err(|error| map_transport_error(&operation, &error))?;

        read_success_body(&operation, response).await.map(|_| ())
    }
}

fn products_url(base_url: &str) -> Result<Url, CatalogError> {
    let mut url = Url::parse(base_url.trim()).map_err(|error| CatalogError::InvalidBaseUrl {
        message: format!("'{base_url}': {error}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidBaseUrl {
            message: format!("'{base_url}' must use http or https"),
        });
    }

    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| CatalogError::InvalidBaseUrl {
            message: format!("'{base_url}' cannot carry a path"),
        })?
        .pop_if_empty()
        .push(PRODUCTS_SEGMENT);
    Ok(url)
}

/// Returns the response body when the status is a success, otherwise maps
/// the response onto [`CatalogError::Api`].
async fn read_success_body(operation: &str, response: Response) -> Result<String, CatalogError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| map_transport_error(operation, &error))?;

    if status.is_success() {
        return Ok(body);
    }

    let message = extract_backend_message(&body)
        .unwrap_or_else(|| truncate_for_message(body.trim(), MAX_ERROR_BODY_CHARS));
    Err(CatalogError::Api {
        status: status.as_u16(),
        message: format!("{operation} failed: {message}"),
    })
}

fn map_transport_error(operation: &str, error: &reqwest::Error) -> CatalogError {
    let detail = if error.is_timeout() {
        "request timed out".to_owned()
    } else {
        error.to_string()
    };
    CatalogError::Network {
        message: format!("{operation} failed: {detail}"),
    }
}

/// Pulls a human-readable message out of a JSON error body, if present.
fn extract_backend_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    if message.is_empty() {
        return "(empty response body)".to_owned();
    }

    let mut chars = message.chars();
    let mut output: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
