//! Error types for the carousel state manager.
//!
//! None of these are retried and none surface to the end user visually;
//! failures are developer-facing. The manager decides per call site
//! whether an error propagates (feed failures during initialization) or
//! is logged and swallowed (clicks on stale items, corrupt stored JSON).

use showcase_core::ProductId;
use thiserror::Error;

/// Errors that can occur while synchronizing the carousel.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// HTTP transport failure while fetching the feed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed responded with a non-success status.
    #[error("feed request failed with status {0}")]
    FeedStatus(reqwest::StatusCode),

    /// The feed responded successfully but the body is not a product array.
    #[error("feed body is not a product array: {0}")]
    FeedBody(serde_json::Error),

    /// A stored value exists but is not parseable JSON.
    #[error("stored value under `{key}` is corrupt: {source}")]
    CorruptCache {
        /// Storage key the unparseable value was read from.
        key: &'static str,
        /// The underlying parse failure.
        source: serde_json::Error,
    },

    /// An interaction referenced a product id with no matching record.
    #[error("no product matches id {0}")]
    UnknownProduct(ProductId),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_product_display() {
        let err = CarouselError::UnknownProduct(ProductId::new("42"));
        assert_eq!(err.to_string(), "no product matches id 42");
    }

    #[test]
    fn test_corrupt_cache_display_names_key() {
        let source = serde_json::from_str::<Vec<String>>("{not valid json").unwrap_err();
        let err = CarouselError::CorruptCache {
            key: "productCarouselData",
            source,
        };
        assert!(
            err.to_string()
                .starts_with("stored value under `productCarouselData` is corrupt")
        );
    }
}
