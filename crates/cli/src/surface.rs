//! Console rendering surface.
//!
//! Renders the card rail as plain text. Geometry is synthetic - every
//! card is [`ITEM_WIDTH`] units wide, margins included - so next/prev
//! clamp exactly like they would against a real track.

use std::collections::HashSet;

use showcase_carousel::{CardView, ScrollBehavior, Surface, TrackMetrics};
use showcase_core::ProductId;
use url::Url;

/// Synthetic card width, margins included.
pub const ITEM_WIDTH: f64 = 220.0;

/// Surface that renders the rail to stdout.
#[derive(Debug)]
pub struct ConsoleSurface {
    cards: Vec<CardView>,
    favorited: HashSet<ProductId>,
    offset: f64,
    viewport_items: usize,
}

impl ConsoleSurface {
    /// Create a surface showing `viewport_items` cards at a time.
    #[must_use]
    pub fn new(viewport_items: usize) -> Self {
        Self {
            cards: Vec::new(),
            favorited: HashSet::new(),
            offset: 0.0,
            viewport_items,
        }
    }

    /// Index of the first visible card at the current offset.
    ///
    /// The offset is always a non-negative multiple of `ITEM_WIDTH`, so
    /// the cast is lossless.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn first_visible(&self) -> usize {
        (self.offset / ITEM_WIDTH).round() as usize
    }

    /// Print the rendered rail, favorites marked with a star.
    pub fn print_rail(&self) {
        let first = self.first_visible();
        let last = (first + self.viewport_items).min(self.cards.len());
        println!(
            "showing {}-{} of {} products",
            first + 1,
            last,
            self.cards.len()
        );

        for (index, card) in self.cards.iter().enumerate() {
            let marker = if self.favorited.contains(&card.id) {
                "*"
            } else {
                " "
            };
            let window = if index >= first && index < last {
                ">"
            } else {
                " "
            };
            println!(
                "{window} {marker} {price:>12}  {name}  [{id}]",
                price = card.price_label,
                name = card.name,
                id = card.id
            );
        }
    }
}

impl Surface for ConsoleSurface {
    fn render(&mut self, cards: &[CardView]) {
        self.cards = cards.to_vec();
    }

    fn set_favorited(&mut self, id: &ProductId, favorited: bool) {
        if favorited {
            self.favorited.insert(id.clone());
        } else {
            self.favorited.remove(id);
        }
    }

    // Card counts never approach f64 precision limits
    #[allow(clippy::cast_precision_loss)]
    fn metrics(&self) -> TrackMetrics {
        TrackMetrics {
            item_width: ITEM_WIDTH,
            viewport_width: ITEM_WIDTH * self.viewport_items as f64,
            track_width: ITEM_WIDTH * self.cards.len() as f64,
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
        self.offset = offset;
    }

    fn open_url(&mut self, url: &Url) {
        println!("open: {url}");
    }
}
