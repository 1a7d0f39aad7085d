//! Favorite management commands.
//!
//! # Usage
//!
//! ```bash
//! showcase favorites list
//! showcase favorites toggle 42
//! showcase favorites clear
//! ```

use std::sync::Arc;

use showcase_carousel::{
    Carousel, CarouselConfig, CarouselError, FAVORITES_KEY, FavoriteSet, HttpFeed, storage,
};
use showcase_core::ProductId;
use thiserror::Error;

use crate::store::{JsonFileStore, StoreError};
use crate::surface::ConsoleSurface;

/// Errors that can occur during favorite operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// State file could not be opened.
    #[error("state file error: {0}")]
    Store(#[from] StoreError),

    /// Carousel initialization failed.
    #[error("carousel error: {0}")]
    Carousel(#[from] CarouselError),
}

/// Print favorited product ids in insertion order.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened.
pub fn list(config: &CarouselConfig) -> Result<(), FavoritesError> {
    let store = JsonFileStore::open(&config.state_path)?;

    let favorites = match storage::read_json::<FavoriteSet>(&store, FAVORITES_KEY) {
        Ok(Some(favorites)) => favorites,
        Ok(None) => FavoriteSet::new(),
        Err(error) => {
            tracing::warn!(%error, "stored favorites are corrupt");
            FavoriteSet::new()
        }
    };

    if favorites.is_empty() {
        println!("no favorites");
    } else {
        for id in favorites.iter() {
            println!("{id}");
        }
    }
    Ok(())
}

/// Toggle the favorite state of one product through a full carousel.
///
/// Goes through `Carousel` rather than editing storage directly so the
/// toggle follows the same membership-flip-then-persist path the host
/// uses.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened or the feed
/// fetch fails on a cache miss.
pub async fn toggle(config: &CarouselConfig, id: &str) -> Result<(), FavoritesError> {
    let feed = HttpFeed::new(config.feed_url.clone());
    let store = Arc::new(JsonFileStore::open(&config.state_path)?);
    let surface = ConsoleSurface::new(1);

    let mut carousel = Carousel::initialize(&feed, store, surface).await?;
    let id = ProductId::new(id);
    let favorited = carousel.handle_favorite_toggle(&id);

    println!(
        "{id}: {}",
        if favorited { "favorited" } else { "unfavorited" }
    );
    Ok(())
}

/// Remove all favorites.
///
/// # Errors
///
/// Returns an error if the state file cannot be opened.
pub fn clear(config: &CarouselConfig) -> Result<(), FavoritesError> {
    let store = JsonFileStore::open(&config.state_path)?;
    storage::write_json(&store, FAVORITES_KEY, &FavoriteSet::new());

    println!("favorites cleared");
    Ok(())
}
