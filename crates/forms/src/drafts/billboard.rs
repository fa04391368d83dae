use entities::ResourceKind;
use entities::models::billboard::{Billboard, BillboardPayload};
use uuid::Uuid;

use crate::resource::FormModel;
use crate::validate::{self, FieldErrors};

/// Editable billboard fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillboardDraft {
    pub label: String,
    pub image_url: String,
}

impl FormModel for BillboardDraft {
    type Entity = Billboard;
    type Payload = BillboardPayload;

    const KIND: ResourceKind = ResourceKind::Billboard;

    fn empty() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Billboard) -> Self {
        Self {
            label: entity.label.clone(),
            image_url: entity.image_url.clone(),
        }
    }

    fn entity_id(entity: &Billboard) -> Uuid {
        entity.id
    }

    fn validate(&self) -> Result<BillboardPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate::require_text(&mut errors, "label", &self.label);
        validate::require_text(&mut errors, "imageUrl", &self.image_url);
        errors.into_result(BillboardPayload {
            label: self.label.clone(),
            image_url: self.image_url.clone(),
        })
    }
}
