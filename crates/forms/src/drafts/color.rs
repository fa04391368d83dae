use entities::ResourceKind;
use entities::models::color::{Color, ColorPayload};
use uuid::Uuid;

use crate::resource::FormModel;
use crate::validate::{self, FieldErrors};

/// Editable color fields; `value` must validate as a hex code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDraft {
    pub name: String,
    pub value: String,
}

impl FormModel for ColorDraft {
    type Entity = Color;
    type Payload = ColorPayload;

    const KIND: ResourceKind = ResourceKind::Color;

    fn empty() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Color) -> Self {
        Self {
            name: entity.name.clone(),
            value: entity.value.clone(),
        }
    }

    fn entity_id(entity: &Color) -> Uuid {
        entity.id
    }

    fn validate(&self) -> Result<ColorPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate::require_text(&mut errors, "name", &self.name);
        validate::require_hex_color(&mut errors, "value", &self.value);
        errors.into_result(ColorPayload {
            name: self.name.clone(),
            value: self.value.clone(),
        })
    }
}
