//! Product feed access.
//!
//! [`ProductFeed`] is the async port the manager fetches through;
//! [`HttpFeed`] is the `reqwest`-backed implementation. One GET of a
//! JSON array - no auth, no pagination, no conditional fetch. There is
//! deliberately no retry and no timeout: a hung feed blocks
//! initialization, and the cache-first path means a healthy install
//! only ever pays for one request.

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use crate::error::CarouselError;
use crate::product::Product;

/// Source of the product sequence.
#[async_trait]
pub trait ProductFeed: Send + Sync {
    /// Fetch the full product sequence.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success response
    /// status, or an undeserializable body.
    async fn fetch(&self) -> Result<Vec<Product>, CarouselError>;
}

/// Feed client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFeed {
    /// Create a feed client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client fetches from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProductFeed for HttpFeed {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<Product>, CarouselError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "feed returned non-success status");
            return Err(CarouselError::FeedStatus(status));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse feed body"
            );
            CarouselError::FeedBody(e)
        })?;

        debug!(count = products.len(), "feed fetched");
        Ok(products)
    }
}
