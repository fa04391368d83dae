use entities::ResourceKind;
use uuid::Uuid;

use crate::validate::FieldErrors;

/// Descriptor tying a form draft to its entity, payload, and rules.
///
/// Implemented once per editable resource; `FormController` is generic over
/// it, so each entity contributes defaults, seeding, and validation and
/// inherits the whole submit/delete lifecycle.
pub trait FormModel: Clone + PartialEq {
    /// Persisted record this form edits
    type Entity;
    /// Wire payload submitted on both create and update
    type Payload;

    const KIND: ResourceKind;

    /// Draft for create mode, holding the documented per-field defaults
    fn empty() -> Self;

    /// Draft for edit mode, seeded from the existing record
    fn from_entity(entity: &Self::Entity) -> Self;

    fn entity_id(entity: &Self::Entity) -> Uuid;

    /// Run the schema rules; a clean draft yields the payload to submit
    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}
