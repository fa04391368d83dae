use entities::ResourceKind;
use entities::models::category::{Category, CategoryPayload};
use uuid::Uuid;

use crate::resource::FormModel;
use crate::validate::{self, FieldErrors};

/// Editable category fields; `billboard_id` comes from the "billboards"
/// reference list and stays `None` until the user picks one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub billboard_id: Option<Uuid>,
}

impl FormModel for CategoryDraft {
    type Entity = Category;
    type Payload = CategoryPayload;

    const KIND: ResourceKind = ResourceKind::Category;

    fn empty() -> Self {
        Self::default()
    }

    fn from_entity(entity: &Category) -> Self {
        Self {
            name: entity.name.clone(),
            billboard_id: Some(entity.billboard_id),
        }
    }

    fn entity_id(entity: &Category) -> Uuid {
        entity.id
    }

    fn validate(&self) -> Result<CategoryPayload, FieldErrors> {
        let mut errors = FieldErrors::default();
        validate::require_text(&mut errors, "name", &self.name);
        let billboard_id = validate::require_selected(&mut errors, "billboardId", self.billboard_id);
        match billboard_id {
            Some(billboard_id) if errors.is_empty() => Ok(CategoryPayload {
                name: self.name.clone(),
                billboard_id,
            }),
            _ => Err(errors),
        }
    }
}
