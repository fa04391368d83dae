use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Image attached to a product, hosted by the external upload service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: Uuid,
    pub url: String,
}

/// Sellable item with category/size/color references and an image gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid, // Foreign key to Category
    pub size_id: Uuid,     // Foreign key to Size
    pub color_id: Uuid,    // Foreign key to Color
    pub name: String,
    pub price: f64,
    pub is_featured: bool, // Shown on the storefront homepage
    pub is_archived: bool, // Hidden everywhere in the store
    pub images: Vec<ProductImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image entry in a product payload; ids are assigned server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub url: String,
}

/// Request body for creating or updating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub images: Vec<ImagePayload>,
    pub price: f64,
    pub category_id: Uuid,
    pub color_id: Uuid,
    pub size_id: Uuid,
    pub is_featured: bool,
    pub is_archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_shape_is_camel_case() {
        let payload = ProductPayload {
            name: "Tee".to_string(),
            images: vec![ImagePayload {
                url: "https://cdn.example/tee.png".to_string(),
            }],
            price: 19.99,
            category_id: Uuid::nil(),
            color_id: Uuid::nil(),
            size_id: Uuid::nil(),
            is_featured: true,
            is_archived: false,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("categoryId").is_some());
        assert!(json.get("isFeatured").is_some());
        assert_eq!(json["images"][0]["url"], "https://cdn.example/tee.png");
        assert!(json.get("category_id").is_none());
    }
}
