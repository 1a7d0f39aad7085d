//! The carousel state manager.
//!
//! One [`Carousel`] owns the lifecycle of one rendered carousel: obtain
//! the product sequence (cache first, feed on miss), render it through
//! the surface, then keep the favorite set and scroll position
//! consistent as the host dispatches interactions. All state lives in
//! the value constructed at initialization - nothing is shared module
//! state, so several instances can coexist on one page.
//!
//! Handlers are synchronous and run to completion, so each one's
//! read-modify-write of storage and scroll position is atomic with
//! respect to the others.

use std::sync::Arc;

use tracing::{debug, info, warn};

use showcase_core::ProductId;

use crate::error::CarouselError;
use crate::favorites::FavoriteSet;
use crate::feed::ProductFeed;
use crate::product::Product;
use crate::storage::{self, FAVORITES_KEY, KeyValueStore, PRODUCT_CACHE_KEY};
use crate::view::{ScrollBehavior, Surface, build_cards};

/// State manager for one rendered carousel.
pub struct Carousel<S: Surface> {
    store: Arc<dyn KeyValueStore>,
    surface: S,
    products: Vec<Product>,
    favorites: FavoriteSet,
}

impl<S: Surface> Carousel<S> {
    /// Initialize a carousel: load or fetch products, render, restore
    /// favorites.
    ///
    /// The product cache is consulted first; a parseable cached value
    /// means no network call at all. A corrupt cached value is logged
    /// and treated as absent. On a successful fetch the sequence is
    /// written to the store before anything renders, so a second
    /// initialization never fetches again.
    ///
    /// Favorites are restored exactly once, after the cards exist: every
    /// stored id with a rendered card is marked favorited.
    ///
    /// # Errors
    ///
    /// Returns an error when the cache is empty and the feed fetch
    /// fails. There is no retry and no fallback rendering.
    pub async fn initialize(
        feed: &dyn ProductFeed,
        store: Arc<dyn KeyValueStore>,
        mut surface: S,
    ) -> Result<Self, CarouselError> {
        let products = load_or_fetch(feed, store.as_ref()).await?;

        let cards = build_cards(&products);
        surface.render(&cards);

        let favorites = load_favorites(store.as_ref());
        for id in favorites.iter() {
            if products.iter().any(|product| product.id == *id) {
                surface.set_favorited(id, true);
            }
        }

        info!(
            products = products.len(),
            favorites = favorites.len(),
            "carousel initialized"
        );

        Ok(Self {
            store,
            surface,
            products,
            favorites,
        })
    }

    /// Advance the track by one item width, clamped to the right edge.
    pub fn handle_next(&mut self) {
        let metrics = self.surface.metrics();
        // Re-read the live offset so rapid clicks clamp independently,
        // never against a stale cached position
        let target = (self.surface.scroll_offset() + metrics.item_width).min(metrics.max_offset());
        self.surface.scroll_to(target, ScrollBehavior::Smooth);
    }

    /// Retreat the track by one item width, clamped at zero.
    pub fn handle_prev(&mut self) {
        let metrics = self.surface.metrics();
        let target = (self.surface.scroll_offset() - metrics.item_width).max(0.0);
        self.surface.scroll_to(target, ScrollBehavior::Smooth);
    }

    /// Open the clicked product's destination, if it has one.
    ///
    /// Unknown ids and missing destinations are logged and otherwise
    /// ignored - a click never takes the carousel down.
    pub fn handle_item_click(&mut self, id: &ProductId) {
        let Some(product) = self.products.iter().find(|product| product.id == *id) else {
            let error = CarouselError::UnknownProduct(id.clone());
            warn!(%error, "item click ignored");
            return;
        };
        let Some(url) = product.url.clone() else {
            warn!(%id, "product has no destination url");
            return;
        };

        debug!(%id, %url, "opening product destination");
        self.surface.open_url(&url);
    }

    /// Toggle the favorite state of `id`; returns the new state.
    ///
    /// The favorite set is the source of truth: membership flips first,
    /// the surface mirrors it, and the set is persisted before this
    /// returns. Hosts must not route the same input event here and to
    /// [`Self::handle_item_click`] - a favorite toggle never navigates.
    pub fn handle_favorite_toggle(&mut self, id: &ProductId) -> bool {
        let favorited = self.favorites.toggle(id);
        self.surface.set_favorited(id, favorited);
        storage::write_json(self.store.as_ref(), FAVORITES_KEY, &self.favorites);

        debug!(%id, favorited, "favorite toggled");
        favorited
    }

    /// Whether `id` is currently favorited.
    #[must_use]
    pub fn is_favorited(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// The rendered product sequence.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The host surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

/// Consult the cache, falling back to the feed on miss or corruption.
async fn load_or_fetch(
    feed: &dyn ProductFeed,
    store: &dyn KeyValueStore,
) -> Result<Vec<Product>, CarouselError> {
    match storage::read_json::<Vec<Product>>(store, PRODUCT_CACHE_KEY) {
        Ok(Some(products)) => {
            debug!(count = products.len(), "product cache hit");
            return Ok(products);
        }
        Ok(None) => debug!("product cache empty"),
        // Fail closed: a corrupt cache is discarded and refetched
        Err(error) => warn!(%error, "discarding corrupt product cache"),
    }

    let products = feed.fetch().await?;
    // Persist before rendering so the next initialization never refetches
    storage::write_json(store, PRODUCT_CACHE_KEY, &products);
    Ok(products)
}

/// Load the stored favorite set, failing closed to empty.
fn load_favorites(store: &dyn KeyValueStore) -> FavoriteSet {
    match storage::read_json::<FavoriteSet>(store, FAVORITES_KEY) {
        Ok(Some(mut favorites)) => {
            favorites.dedup();
            favorites
        }
        Ok(None) => FavoriteSet::new(),
        Err(error) => {
            warn!(%error, "discarding corrupt favorites");
            FavoriteSet::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use showcase_core::Price;
    use url::Url;

    use super::*;
    use crate::storage::MemoryStore;
    use crate::view::{CardView, TrackMetrics};

    fn product(id: &str, with_url: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            image: Url::parse("https://cdn.example.com/img.jpg").unwrap(),
            price: Price::new(Decimal::new(999, 2)),
            url: with_url
                .then(|| Url::parse(&format!("https://shop.example.com/products/{id}")).unwrap()),
        }
    }

    struct StubFeed {
        products: Vec<Product>,
        calls: AtomicUsize,
    }

    impl StubFeed {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductFeed for StubFeed {
        async fn fetch(&self) -> Result<Vec<Product>, CarouselError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.clone())
        }
    }

    #[derive(Default)]
    struct SurfaceLog {
        rendered: Vec<CardView>,
        marks: Vec<(ProductId, bool)>,
        offset: f64,
        opened: Vec<Url>,
    }

    struct FakeSurface {
        log: Arc<Mutex<SurfaceLog>>,
        metrics: TrackMetrics,
    }

    impl FakeSurface {
        fn new(metrics: TrackMetrics) -> (Self, Arc<Mutex<SurfaceLog>>) {
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

    impl Surface for FakeSurface {
        fn render(&mut self, cards: &[CardView]) {
            self.log.lock().unwrap().rendered = cards.to_vec();
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

        fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
            self.log.lock().unwrap().offset = offset;
        }

        fn open_url(&mut self, url: &Url) {
            self.log.lock().unwrap().opened.push(url.clone());
        }
    }

    fn metrics() -> TrackMetrics {
        TrackMetrics {
            item_width: 200.0,
            viewport_width: 600.0,
            track_width: 800.0,
        }
    }

    async fn carousel_with(
        feed: &StubFeed,
        store: &Arc<dyn KeyValueStore>,
    ) -> (Carousel<FakeSurface>, Arc<Mutex<SurfaceLog>>) {
        let (surface, log) = FakeSurface::new(metrics());
        let carousel = Carousel::initialize(feed, Arc::clone(store), surface)
            .await
            .unwrap();
        (carousel, log)
    }

    #[tokio::test]
    async fn test_initialize_renders_all_products() {
        let feed = StubFeed::new(vec![product("1", true), product("2", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let (carousel, log) = carousel_with(&feed, &store).await;

        assert_eq!(carousel.products().len(), 2);
        assert_eq!(log.lock().unwrap().rendered.len(), 2);
        assert_eq!(feed.calls(), 1);
    }

    #[tokio::test]
    async fn test_next_clamps_at_right_edge() {
        let feed = StubFeed::new(vec![product("1", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        // max offset is 800 - 600 = 200, one click away
        carousel.handle_next();
        assert!((log.lock().unwrap().offset - 200.0).abs() < f64::EPSILON);

        carousel.handle_next();
        assert!((log.lock().unwrap().offset - 200.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_prev_clamps_at_zero() {
        let feed = StubFeed::new(vec![product("1", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        carousel.handle_prev();
        assert!(log.lock().unwrap().offset.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_item_click_opens_destination() {
        let feed = StubFeed::new(vec![product("1", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        carousel.handle_item_click(&ProductId::new("1"));

        let opened = log.lock().unwrap().opened.clone();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            opened.first().unwrap().as_str(),
            "https://shop.example.com/products/1"
        );
    }

    #[tokio::test]
    async fn test_item_click_unknown_id_is_ignored() {
        let feed = StubFeed::new(vec![product("1", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        carousel.handle_item_click(&ProductId::new("ghost"));
        assert!(log.lock().unwrap().opened.is_empty());
    }

    #[tokio::test]
    async fn test_item_click_without_destination_is_ignored() {
        let feed = StubFeed::new(vec![product("1", false)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        carousel.handle_item_click(&ProductId::new("1"));
        assert!(log.lock().unwrap().opened.is_empty());
    }

    #[tokio::test]
    async fn test_favorite_toggle_updates_surface_and_store() {
        let feed = StubFeed::new(vec![product("1", true)]);
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let (mut carousel, log) = carousel_with(&feed, &store).await;

        assert!(carousel.handle_favorite_toggle(&ProductId::new("1")));
        assert!(carousel.is_favorited(&ProductId::new("1")));
        assert_eq!(store.get(FAVORITES_KEY).as_deref(), Some(r#"["1"]"#));

        let marks = log.lock().unwrap().marks.clone();
        assert_eq!(marks.last().unwrap(), &(ProductId::new("1"), true));
    }
}
