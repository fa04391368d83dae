//! Read-only lookup collections that populate select fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable option in a foreign-key dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: Uuid,
    pub display_name: String,
}

impl ReferenceItem {
    pub fn new(id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Lookup lists keyed by name ("categories", "colors", ...), supplied by the
/// page that mounts the form. Snapshots for the controller's lifetime: never
/// mutated or refetched here; the owner is responsible for freshness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLists(BTreeMap<&'static str, Vec<ReferenceItem>>);

impl ReferenceLists {
    pub fn with(mut self, name: &'static str, items: Vec<ReferenceItem>) -> Self {
        self.0.insert(name, items);
        self
    }

    /// Items for a named list, empty for unknown names
    pub fn get(&self, name: &str) -> &[ReferenceItem] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
