//! Per-entity form state. A draft is the in-progress, possibly-invalid copy
//! of an entity's editable fields; [`crate::FormModel`] ties each one to its
//! entity and payload types.

pub mod billboard;
pub mod category;
pub mod color;
pub mod product;
pub mod size;

pub use billboard::BillboardDraft;
pub use category::CategoryDraft;
pub use color::ColorDraft;
pub use product::ProductDraft;
pub use size::SizeDraft;
