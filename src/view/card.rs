use std::borrow::Cow;

use crate::catalog::Product;

/// Titles longer than this are truncated.
pub const TITLE_LIMIT: usize = 60;
/// Characters kept from a truncated title before the ellipsis.
const TITLE_KEEP: usize = 57;
const ELLIPSIS: &str = "...";

/// Shortens `title` to 57 characters plus "..." when it exceeds 60 characters.
///
/// Counts Unicode scalar values so multi-byte titles are never split inside
/// a character.
pub fn truncate_title(title: &str) -> Cow<'_, str> {
    if title.chars().count() <= TITLE_LIMIT {
        return Cow::Borrowed(title);
    }
    let mut short: String = title.chars().take(TITLE_KEEP).collect();
    short.push_str(ELLIPSIS);
    Cow::Owned(short)
}

/// Five-symbol star indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    pub const MAX: u8 = 5;

    /// Rounds `rating` and clamps it into `0..=5`. NaN counts as zero.
    pub fn from_rating(rating: f64) -> Self {
        let rounded = rating.round();
        let filled = if rounded.is_nan() {
            0
        } else {
            rounded.clamp(0.0, f64::from(Self::MAX)) as u8
        };
        Self { filled }
    }

    pub fn filled(&self) -> u8 {
        self.filled
    }

    pub fn empty(&self) -> u8 {
        Self::MAX - self.filled
    }
}

/// Builds the per-product detail links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLinks {
    page: String,
}

impl DetailLinks {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }

    /// `<page>?id=<id>`. Identifiers are integers, so they need no escaping.
    pub fn href(&self, id: u64) -> String {
        format!("{}?id={}", self.page, id)
    }
}

impl Default for DetailLinks {
    fn default() -> Self {
        Self::new("product.html")
    }
}

/// Everything a renderer needs to draw one product card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u64,
    /// Title after truncation.
    pub title: String,
    /// Untruncated title, used as image alt text.
    pub full_title: String,
    pub thumbnail: String,
    pub stars: StarRating,
    pub stock: i64,
    pub price: String,
    pub rating: String,
    pub on_sale: bool,
    pub href: String,
}

impl CardView {
    pub fn new(product: &Product, links: &DetailLinks) -> Self {
        Self {
            id: product.id,
            title: truncate_title(&product.title).into_owned(),
            full_title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            stars: StarRating::from_rating(product.rating),
            stock: product.stock,
            price: product.price.to_string(),
            rating: product.rating.to_string(),
            on_sale: product.is_on_sale(),
            href: links.href(product.id),
        }
    }
}
