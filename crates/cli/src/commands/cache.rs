//! Product cache inspection and maintenance.
//!
//! The cached feed never expires on its own; `cache clear` is the
//! manual escape hatch when stale prices need a refetch.
//!
//! # Usage
//!
//! ```bash
//! showcase cache status
//! showcase cache clear
//! ```

use showcase_carousel::{CarouselConfig, PRODUCT_CACHE_KEY, Product, storage};
use thiserror::Error;

use crate::store::{JsonFileStore, StoreError};

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// State file could not be opened.
    #[error("state file error: {0}")]
    Store(#[from] StoreError),
}

/// Print whether the product cache is populated, empty, or corrupt.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened.
pub fn status(config: &CarouselConfig) -> Result<(), CacheError> {
    let store = JsonFileStore::open(&config.state_path)?;

    match storage::read_json::<Vec<Product>>(&store, PRODUCT_CACHE_KEY) {
        Ok(Some(products)) => println!("cache: {} products", products.len()),
        Ok(None) => println!("cache: empty"),
        Err(error) => println!("cache: corrupt ({error})"),
    }
    Ok(())
}

/// Drop the cached product feed.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened.
pub fn clear(config: &CarouselConfig) -> Result<(), CacheError> {
    let store = JsonFileStore::open(&config.state_path)?;

    if store.remove(PRODUCT_CACHE_KEY) {
        println!("cache cleared");
    } else {
        println!("cache already empty");
    }
    Ok(())
}
