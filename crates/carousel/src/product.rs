//! Product records as carried by the recommendation feed.

use serde::{Deserialize, Serialize};
use showcase_core::{Price, ProductId};
use url::Url;

/// One product in the recommendation feed.
///
/// Immutable once fetched. Field names mirror the feed payload so the
/// cached copy stays a verbatim serialization of what the feed sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Feed identifier; string and numeric ids are both accepted.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Card image.
    #[serde(rename = "img")]
    pub image: Url,
    /// Unit price.
    pub price: Price,
    /// Destination opened when the card is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}
