//! Product catalog models and data structures.
//!
//! Contains structures for products, categories, and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image shown when a product has no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50";

/// Image sent when the form leaves the image URL empty.
pub const DEFAULT_UPLOAD_IMAGE: &str = "https://placeimg.com/640/480/any";

/// Represents a product from the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID assigned by the service
    pub id: i64,
    /// Product title
    #[serde(default)]
    pub title: String,
    /// Price in dollars
    #[serde(default)]
    pub price: f64,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Category reference (the service occasionally omits it)
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URLs, possibly wrapped in stray JSON characters
    #[serde(default)]
    pub images: Vec<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product category reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category ID
    pub id: i64,
    /// Category display name
    #[serde(default)]
    pub name: String,
    /// Category image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Name of the product's category, or "N/A".
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("N/A", |c| c.name.as_str())
    }

    /// ID of the product's category, defaulting to 1 when missing.
    pub fn category_id(&self) -> i64 {
        self.category.as_ref().map_or(1, |c| c.id)
    }

    /// First image with stray bracket and quote characters removed.
    ///
    /// # Returns
    /// * `Option<String>` - Cleaned URL, or None if the product has no images
    pub fn first_image(&self) -> Option<String> {
        self.images.first().map(|raw| clean_image_url(raw))
    }

    /// URL to display for the product thumbnail.
    ///
    /// # Returns
    /// * `String` - Cleaned first image if it looks like an http(s) URL, otherwise the placeholder
    pub fn display_image(&self) -> String {
        match self.first_image() {
            Some(url) if url.starts_with("http") => url,
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Format price as "$12.5".
    pub fn format_price(&self) -> String {
        format!("${}", self.price)
    }

    /// Format the last update (or creation) time as a readable string.
    ///
    /// # Returns
    /// * `Option<String>` - Formatted date (e.g., "Mo. 15.01.2024 10:30"), None if unknown
    pub fn format_updated(&self) -> Option<String> {
        self.updated_at
            .or(self.creation_at)
            .map(|ts| ts.format("%a. %d.%m.%Y %H:%M").to_string())
    }
}

/// Body sent to the service when creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: i64,
    pub images: Vec<String>,
}

/// Strip `[`, `]` and `"` from an image URL.
///
/// The catalog service sometimes returns image entries such as
/// `["https://i.imgur.com/abc.jpeg"]` instead of a bare URL.
pub fn clean_image_url(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 4,
        "title": "Handmade Fresh Table",
        "slug": "handmade-fresh-table",
        "price": 687,
        "description": "Andy shoes are designed to keeping in...",
        "category": {
            "id": 5,
            "name": "Others",
            "image": "https://placehold.co/600x400",
            "slug": "others"
        },
        "images": ["[\"https://placehold.co/600x400\"", "https://placehold.co/600x401\"]"],
        "creationAt": "2024-05-03T20:51:05.000Z",
        "updatedAt": "2024-05-04T08:00:00.000Z"
    }"#;

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.price, 687.0);
        assert_eq!(product.category_name(), "Others");
        assert_eq!(product.category_id(), 5);
        assert_eq!(product.images.len(), 2);
        assert!(product.updated_at.is_some());
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"id": 9, "title": "Bare"}"#).unwrap();
        assert_eq!(product.category_name(), "N/A");
        assert_eq!(product.category_id(), 1);
        assert!(product.first_image().is_none());
        assert_eq!(product.display_image(), PLACEHOLDER_IMAGE);
        assert!(product.format_updated().is_none());
    }

    #[test]
    fn test_clean_image_url() {
        assert_eq!(
            clean_image_url("[\"https://i.imgur.com/x.jpeg\"]"),
            "https://i.imgur.com/x.jpeg"
        );
        assert_eq!(clean_image_url("https://ok.example/a.png"), "https://ok.example/a.png");
    }

    #[test]
    fn test_display_image_rejects_non_http() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "images": ["[\"not-a-url\"]"]}"#).unwrap();
        assert_eq!(product.first_image().as_deref(), Some("not-a-url"));
        assert_eq!(product.display_image(), PLACEHOLDER_IMAGE);

        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.display_image(), "https://placehold.co/600x400");
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = ProductPayload {
            title: "Lamp".to_string(),
            price: 19.5,
            description: "Warm light".to_string(),
            category_id: 2,
            images: vec![DEFAULT_UPLOAD_IMAGE.to_string()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["categoryId"], 2);
        assert_eq!(json["price"], 19.5);
        assert_eq!(json["images"][0], DEFAULT_UPLOAD_IMAGE);
    }

    #[test]
    fn test_format_price() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "price": 12.5}"#).unwrap();
        assert_eq!(product.format_price(), "$12.5");
    }
}
