//! Card building and the rendering surface port.
//!
//! [`build_cards`] is a pure function of the product sequence - favorite
//! state is applied afterwards through [`Surface::set_favorited`], never
//! at build time. The [`Surface`] trait is the boundary between the
//! engine and whatever actually draws: a DOM, a terminal, a test fake.

use std::time::Duration;

use showcase_core::ProductId;
use url::Url;

use crate::product::Product;

/// Currency suffix appended to every rendered price.
pub const PRICE_SUFFIX: &str = "USD";

/// How long a smooth scroll animates for.
pub const SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Display data for one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Product this card renders.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Card image.
    pub image: Url,
    /// Price text, suffix included (e.g., "24.90 USD").
    pub price_label: String,
}

/// Build card views from the product sequence.
///
/// Pure: same products in, same cards out. Favorited state is not part
/// of a card; it is applied to the surface separately so that rendering
/// never reads the favorite set.
#[must_use]
pub fn build_cards(products: &[Product]) -> Vec<CardView> {
    products
        .iter()
        .map(|product| CardView {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price_label: product.price.label(PRICE_SUFFIX),
        })
        .collect()
}

/// Track geometry reported by the surface.
///
/// `item_width` includes inter-card margins. `track_width` is the full
/// scrollable extent of the card strip, `viewport_width` the visible
/// window onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Rendered width of one card, margins included.
    pub item_width: f64,
    /// Width of the visible window.
    pub viewport_width: f64,
    /// Full width of the card strip.
    pub track_width: f64,
}

impl TrackMetrics {
    /// Rightmost offset the track can scroll to.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.track_width - self.viewport_width).max(0.0)
    }
}

/// How a scroll should be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Instant,
    /// Animate over [`SCROLL_DURATION`].
    Smooth,
}

/// Rendering and interaction boundary the host implements.
///
/// The host owns the anchor element the cards are inserted after, binds
/// its input events to the manager's handler methods (once per load),
/// and reports live scroll geometry back. One rule for event wiring: an
/// input that toggles a favorite must not also activate the item it sits
/// inside.
pub trait Surface {
    /// Render the full card sequence after the host's anchor element.
    fn render(&mut self, cards: &[CardView]);

    /// Mark one rendered card as favorited or not.
    fn set_favorited(&mut self, id: &ProductId, favorited: bool);

    /// Current track geometry.
    fn metrics(&self) -> TrackMetrics;

    /// Current scroll offset of the track.
    fn scroll_offset(&self) -> f64;

    /// Scroll the track to `offset`.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Open `url` in a new browsing context.
    fn open_url(&mut self, url: &Url);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use showcase_core::Price;

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            image: Url::parse("https://cdn.example.com/img.jpg").unwrap(),
            price: Price::new(Decimal::new(cents, 2)),
            url: None,
        }
    }

    #[test]
    fn test_build_cards_formats_prices() {
        let cards = build_cards(&[product("1", "Mug", 1250)]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards.first().unwrap().price_label, "12.50 USD");
    }

    #[test]
    fn test_build_cards_keeps_feed_order() {
        let cards = build_cards(&[
            product("b", "Second", 100),
            product("a", "First", 100),
        ]);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_max_offset() {
        let metrics = TrackMetrics {
            item_width: 200.0,
            viewport_width: 600.0,
            track_width: 1600.0,
        };
        assert!((metrics.max_offset() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_offset_clamps_short_track_to_zero() {
        // Fewer items than fit the viewport: the track cannot scroll at all
        let metrics = TrackMetrics {
            item_width: 200.0,
            viewport_width: 600.0,
            track_width: 400.0,
        };
        assert!(metrics.max_offset().abs() < f64::EPSILON);
    }
}
