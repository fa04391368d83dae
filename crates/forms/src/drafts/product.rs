use entities::ResourceKind;
use entities::models::product::{ImagePayload, Product, ProductPayload};
use uuid::Uuid;

use crate::resource::FormModel;
use crate::validate::{self, FieldErrors};

/// Editable product fields. The three id fields come from the
/// "categories" / "colors" / "sizes" reference lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub images: Vec<String>,
    pub price: f64,
    pub category_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_archived: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            images: Vec::new(),
            price: 0.0,
            category_id: None,
            color_id: None,
            size_id: None,
            is_featured: false,
            is_archived: false,
        }
    }
}

impl ProductDraft {
    /// Image list with `url` appended. Returns a fresh list; the current
    /// one is left untouched so earlier snapshots stay valid.
    pub fn images_with(&self, url: impl Into<String>) -> Vec<String> {
        let mut images = self.images.clone();
        images.push(url.into());
        images
    }

    /// Image list without every entry matching `url`, same copy-on-write
    /// discipline as [`Self::images_with`]
    pub fn images_without(&self, url: &str) -> Vec<String> {
        self.images
            .iter()
            .filter(|current| current.as_str() != url)
            .cloned()
            .collect()
    }
}

impl FormModel for ProductDraft {
    type Entity = Product;
    type Payload = ProductPayload;

    const KIND: ResourceKind = ResourceKind::Product;

    fn empty() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Product) -> Self {
        Self {
            name: entity.name.clone(),
            images: entity.images.iter().map(|image| image.url.clone()).collect(),
            price: entity.price,
            category_id: Some(entity.category_id),
            color_id: Some(entity.color_id),
            size_id: Some(entity.size_id),
            is_featured: entity.is_featured,
            is_archived: entity.is_archived,
        }
    }

    fn entity_id(entity: &Product) -> Uuid {
        entity.id
    }

    fn validate(&self) -> Result<ProductPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate::require_text(&mut errors, "name", &self.name);
        validate::require_min(&mut errors, "price", self.price, 1.0);
        let category_id = validate::require_selected(&mut errors, "categoryId", self.category_id);
        let color_id = validate::require_selected(&mut errors, "colorId", self.color_id);
        let size_id = validate::require_selected(&mut errors, "sizeId", self.size_id);

        match (category_id, color_id, size_id) {
            (Some(category_id), Some(color_id), Some(size_id)) if errors.is_empty() => {
                Ok(ProductPayload {
                    name: self.name.clone(),
                    images: self
                        .images
                        .iter()
                        .map(|url| ImagePayload { url: url.clone() })
                        .collect(),
                    price: self.price,
                    category_id,
                    color_id,
                    size_id,
                    is_featured: self.is_featured,
                    is_archived: self.is_archived,
                })
            }
            _ => Err(errors),
        }
    }
}
