//! Showcase Carousel - product recommendation carousel state manager.
//!
//! Owns the carousel lifecycle: obtain the product sequence (network or
//! cache) → render → maintain the favorite set and scroll position as
//! the host dispatches interactions.
//!
//! # Architecture
//!
//! The engine is written against three narrow ports so it runs anywhere
//! and tests without a live DOM:
//!
//! - [`storage::KeyValueStore`] - persistence; browser local storage, a
//!   JSON file, or an in-memory map all fit the two-method interface
//! - [`feed::ProductFeed`] - the remote product feed; [`feed::HttpFeed`]
//!   is the `reqwest`-backed implementation
//! - [`view::Surface`] - rendering and scroll geometry; the engine never
//!   touches a real DOM
//!
//! # Example
//!
//! ```rust,ignore
//! use showcase_carousel::{Carousel, CarouselConfig, HttpFeed, MemoryStore};
//!
//! let config = CarouselConfig::from_env()?;
//! let feed = HttpFeed::new(config.feed_url.clone());
//! let store = std::sync::Arc::new(MemoryStore::new());
//!
//! let mut carousel = Carousel::initialize(&feed, store, surface).await?;
//! carousel.handle_next();
//! carousel.handle_favorite_toggle(&"42".into());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod config;
pub mod error;
pub mod favorites;
pub mod feed;
pub mod product;
pub mod storage;
pub mod view;

pub use carousel::Carousel;
pub use config::{CarouselConfig, ConfigError};
pub use error::CarouselError;
pub use favorites::FavoriteSet;
pub use feed::{HttpFeed, ProductFeed};
pub use product::Product;
pub use storage::{FAVORITES_KEY, KeyValueStore, MemoryStore, PRODUCT_CACHE_KEY};
pub use view::{CardView, ScrollBehavior, Surface, TrackMetrics, build_cards};
