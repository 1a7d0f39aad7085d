//! Integration tests for Showcase.
//!
//! Full carousel flows over in-memory fakes - no network and no real
//! surface. The fakes live here so every test file shares them:
//!
//! - [`CountingFeed`] - serves canned products and counts fetches
//! - [`FailingFeed`] - always fails with a non-success feed status
//! - [`RecordingSurface`] - records renders, favorite marks, scrolls,
//!   and opened urls behind a shared [`SurfaceLog`] handle
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p showcase-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use showcase_carousel::{
    CardView, CarouselError, Product, ProductFeed, ScrollBehavior, Surface, TrackMetrics,
};
use showcase_core::{Price, ProductId};
use url::Url;

/// Build a product fixture with a destination url.
///
/// # Panics
///
/// Panics if the fixture urls fail to parse (they never do).
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        image: Url::parse(&format!("https://cdn.example.com/{id}.jpg")).unwrap(),
        price: Price::new(Decimal::new(cents, 2)),
        url: Some(Url::parse(&format!("https://shop.example.com/products/{id}")).unwrap()),
    }
}

/// Build a product fixture without a destination url.
#[must_use]
pub fn product_without_url(id: &str) -> Product {
    Product {
        url: None,
        ..product(id, 999)
    }
}

// =============================================================================
// Feed Fakes
// =============================================================================

/// Feed that serves canned products and counts how often it is fetched.
pub struct CountingFeed {
    products: Vec<Product>,
    calls: AtomicUsize,
}

impl CountingFeed {
    /// Create a feed serving `products`.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductFeed for CountingFeed {
    async fn fetch(&self) -> Result<Vec<Product>, CarouselError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

/// Feed that always fails with a non-success status.
pub struct FailingFeed;

#[async_trait]
impl ProductFeed for FailingFeed {
    async fn fetch(&self) -> Result<Vec<Product>, CarouselError> {
        Err(CarouselError::FeedStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}

// =============================================================================
// Surface Fake
// =============================================================================

/// Everything a [`RecordingSurface`] has been asked to do.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    /// Card sequences passed to `render`, in call order.
    pub rendered: Vec<Vec<CardView>>,
    /// Favorite marks in call order.
    pub marks: Vec<(ProductId, bool)>,
    /// Scroll targets in call order.
    pub scrolls: Vec<(f64, ScrollBehavior)>,
    /// Current scroll offset.
    pub offset: f64,
    /// Urls passed to `open_url`, in call order.
    pub opened: Vec<Url>,
}

impl SurfaceLog {
    /// Last favorited state recorded for `id` (false if never marked).
    #[must_use]
    pub fn favorited(&self, id: &ProductId) -> bool {
        self.marks
            .iter()
            .rev()
            .find(|(marked, _)| marked == id)
            .is_some_and(|(_, favorited)| *favorited)
    }
}

/// Surface that records every call into a shared [`SurfaceLog`].
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
    metrics: TrackMetrics,
}

impl RecordingSurface {
    /// Create a surface with fixed `metrics`, returning the log handle.
    #[must_use]
    pub fn new(metrics: TrackMetrics) -> (Self, Arc<Mutex<SurfaceLog>>) {
        let log = Arc::new(Mutex::new(SurfaceLog::default()));
        (
            Self {
                log: Arc::clone(&log),
                metrics,
            },
            log,
        )
    }
}

// A poisoned log mutex means a test already panicked; unwrap is fine here.
#[allow(clippy::unwrap_used)]
impl Surface for RecordingSurface {
    fn render(&mut self, cards: &[CardView]) {
        self.log.lock().unwrap().rendered.push(cards.to_vec());
    }

    fn set_favorited(&mut self, id: &ProductId, favorited: bool) {
        self.log.lock().unwrap().marks.push((id.clone(), favorited));
    }

    fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    fn scroll_offset(&self) -> f64 {
        self.log.lock().unwrap().offset
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        let mut log = self.log.lock().unwrap();
        log.scrolls.push((offset, behavior));
        log.offset = offset;
    }

    fn open_url(&mut self, url: &Url) {
        self.log.lock().unwrap().opened.push(url.clone());
    }
}
