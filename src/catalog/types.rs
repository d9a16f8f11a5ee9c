use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product as returned by the listing, category and search endpoints.
///
/// Only the fields the storefront renders are kept; the API sends many more
/// and those are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub thumbnail: String,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage > 0.0
    }
}

/// Envelope shared by every product endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Missing or `null` is an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl ProductPage {
    /// Decodes a response body. A JSON value that is not an object carries
    /// no products.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Product>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A product category.
///
/// Older API revisions answer `/products/categories` with bare slugs,
/// newer ones with `{ slug, name, url }` objects. Both decode to this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCategory")]
pub struct Category {
    /// Value sent to the category endpoint.
    pub slug: String,
    /// Human readable label for the selector.
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Slug(String),
    Detailed {
        slug: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        match raw {
            RawCategory::Slug(slug) => Category::from_slug(slug),
            RawCategory::Detailed {
                slug,
                name: Some(name),
            } => Category { slug, name },
            RawCategory::Detailed { slug, name: None } => Category::from_slug(slug),
        }
    }
}

impl Category {
    /// Builds a category whose label is the slug with its first letter upper-cased.
    pub fn from_slug(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let name = capitalize(&slug);
        Self { slug, name }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_defaults_missing_discount_and_stock() {
        let product: Product = serde_json::from_str(
            r#"{"id": 7, "title": "Lamp", "price": 19.5, "thumbnail": "t.png", "rating": 4.2}"#,
        )
        .unwrap();
        assert_eq!(product.discount_percentage, 0.0);
        assert_eq!(product.stock, 0);
        assert!(!product.is_on_sale());
    }

    #[test]
    fn product_page_without_products_is_empty() {
        let page: ProductPage = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert!(page.products.is_empty());
    }

    #[test]
    fn null_products_is_empty() {
        let page: ProductPage = serde_json::from_str(r#"{"products": null, "total": 0}"#).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, Some(0));
    }

    #[test]
    fn non_object_body_is_empty_page() {
        for body in ["[]", "null", "\"maintenance\"", "42"] {
            let value: Value = serde_json::from_str(body).unwrap();
            assert_eq!(ProductPage::from_value(value).unwrap(), ProductPage::default());
        }
    }

    #[test]
    fn malformed_product_is_still_an_error() {
        let value: Value = serde_json::from_str(r#"{"products": [{"id": "x"}]}"#).unwrap();
        assert!(ProductPage::from_value(value).is_err());
    }

    #[test]
    fn categories_decode_from_strings_and_objects() {
        let categories: Vec<Category> = serde_json::from_str(
            r#"["beauty", {"slug": "home-decoration", "name": "Home Decoration", "url": "x"}]"#,
        )
        .unwrap();
        assert_eq!(categories[0], Category::from_slug("beauty"));
        assert_eq!(categories[0].name, "Beauty");
        assert_eq!(categories[1].slug, "home-decoration");
        assert_eq!(categories[1].name, "Home Decoration");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
