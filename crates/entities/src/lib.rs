//! Domain records for the storefront admin dashboard.
//!
//! Each model module carries the persisted entity plus the payload struct
//! its form submits on create and update. Persistence and the HTTP server
//! live behind the store API; this crate only defines the shared shapes.

pub mod kind;
pub mod models;

pub use kind::ResourceKind;
