use entities::ResourceKind;
use entities::models::size::{Size, SizePayload};
use uuid::Uuid;

use crate::resource::FormModel;
use crate::validate::{self, FieldErrors};

/// Editable size fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeDraft {
    pub name: String,
    pub value: String,
}

impl FormModel for SizeDraft {
    type Entity = Size;
    type Payload = SizePayload;

    const KIND: ResourceKind = ResourceKind::Size;

    fn empty() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Size) -> Self {
        Self {
            name: entity.name.clone(),
            value: entity.value.clone(),
        }
    }

    fn entity_id(entity: &Size) -> Uuid {
        entity.id
    }

    fn validate(&self) -> Result<SizePayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate::require_text(&mut errors, "name", &self.name);
        validate::require_text(&mut errors, "value", &self.value);
        errors.into_result(SizePayload {
            name: self.name.clone(),
            value: self.value.clone(),
        })
    }
}
