//! Create/edit/delete form lifecycle for store resources.
//!
//! [`FormController`] is generic over a [`FormModel`] descriptor, so the
//! five dashboard entities share one controller instead of five copies of
//! the same submit/delete choreography. Operations are pure: each returns
//! the [`Effect`]s to execute, and the async world (HTTP, router, toasts)
//! lives entirely in the `services` crate.

pub mod controller;
pub mod drafts;
pub mod references;
pub mod resource;
pub mod validate;

pub use controller::{Effect, FormController, Mode, MutationOutcome, MutationRequest, Phase};
pub use references::{ReferenceItem, ReferenceLists};
pub use resource::FormModel;
pub use validate::FieldErrors;
