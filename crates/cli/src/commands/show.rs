//! Render the carousel to the console.
//!
//! # Usage
//!
//! ```bash
//! showcase show
//! ```
//!
//! # Environment Variables
//!
//! - `SHOWCASE_FEED_URL` - Product feed endpoint
//! - `SHOWCASE_STATE_PATH` - Local state file (cache + favorites)

use std::sync::Arc;

use showcase_carousel::{Carousel, CarouselConfig, CarouselError, HttpFeed};
use thiserror::Error;

use crate::store::{JsonFileStore, StoreError};
use crate::surface::ConsoleSurface;

/// Cards shown at once in the console viewport.
const VIEWPORT_ITEMS: usize = 4;

/// Errors that can occur while rendering the carousel.
#[derive(Debug, Error)]
pub enum ShowError {
    /// State file could not be opened.
    #[error("state file error: {0}")]
    Store(#[from] StoreError),

    /// Carousel initialization failed.
    #[error("carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

/// Initialize the carousel against the local state file and print it.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened or the feed
/// fetch fails on a cache miss.
pub async fn run(config: &CarouselConfig) -> Result<(), ShowError> {
    let feed = HttpFeed::new(config.feed_url.clone());
    let store = Arc::new(JsonFileStore::open(&config.state_path)?);
    let surface = ConsoleSurface::new(VIEWPORT_ITEMS);

    let carousel = Carousel::initialize(&feed, store, surface).await?;
    carousel.surface().print_rail();

    Ok(())
}
