//! Generic resource-form state machine.
//!
//! One controller instance manages one entity through its create-or-edit
//! form. Every operation is synchronous and returns the effects the caller
//! must execute; the only suspension points in the whole lifecycle are the
//! mutations those effects carry, which the caller resolves back in through
//! [`FormController::resolve_submit`] / [`FormController::resolve_delete`].

use entities::ResourceKind;
use tracing::debug;
use uuid::Uuid;

use crate::references::ReferenceLists;
use crate::resource::FormModel;
use crate::validate::FieldErrors;

/// Whether this form creates a new record or edits an existing one.
/// Derived once at construction and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { id: Uuid },
}

/// Mutation lifecycle state. `Submitting` and `Deleting` exclude every other
/// mutating operation, which is the entire locking discipline needed: one
/// controller, one event loop, at most one mutation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Deleting,
}

impl Phase {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Loading flag the UI uses to disable triggers
    pub fn is_loading(self) -> bool {
        !self.is_idle()
    }
}

/// The single network call an operation dispatches
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest<P> {
    Create { payload: P },
    Update { id: Uuid, payload: P },
    Delete { id: Uuid },
}

/// Result of a dispatched mutation. The wire contract carries no structured
/// detail, so the controller only ever sees success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    Failure,
}

/// Command for the surrounding shell, produced instead of performed so the
/// controller stays pure and testable without a router or toast system
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<P> {
    /// Dispatch exactly one mutation and feed the outcome back in
    Mutate(MutationRequest<P>),
    /// Revalidate any visible listing of this resource kind
    RefreshListing,
    /// Client-side navigation, fire-and-forget
    Navigate(String),
    NotifySuccess(String),
    NotifyFailure(String),
}

/// Heading copy for the form page, mode-dependent like the toasts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHeading {
    pub title: String,
    pub description: String,
    pub action: String,
}

/// Controller for one editable entity of kind `D::KIND`
#[derive(Debug, Clone)]
pub struct FormController<D: FormModel> {
    store_id: Uuid,
    mode: Mode,
    draft: D,
    references: ReferenceLists,
    field_errors: FieldErrors,
    phase: Phase,
    confirm_open: bool,
}

impl<D: FormModel> FormController<D> {
    /// Mount a form for `entity` (edit mode) or a blank one (create mode),
    /// scoped to the store that owns the resource
    pub fn new(store_id: Uuid, entity: Option<&D::Entity>, references: ReferenceLists) -> Self {
        let (mode, draft) = match entity {
            Some(entity) => (
                Mode::Edit {
                    id: D::entity_id(entity),
                },
                D::from_entity(entity),
            ),
            None => (Mode::Create, D::empty()),
        };
        Self {
            store_id,
            mode,
            draft,
            references,
            field_errors: FieldErrors::default(),
            phase: Phase::default(),
            confirm_open: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Field edits go straight to the draft; rules only run at submit, so a
    /// temporarily invalid draft is fine
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Errors from the last rejected submit, cleared by the next clean one
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn references(&self) -> &ReferenceLists {
        &self.references
    }

    /// Listing page for this resource kind within the store
    pub fn listing_route(&self) -> String {
        format!("/{}/{}", self.store_id, D::KIND.path_segment())
    }

    /// Where a successful delete lands: billboards return to the dashboard
    /// root, every other kind to its listing
    fn delete_landing_route(&self) -> String {
        match D::KIND {
            ResourceKind::Billboard => "/".to_string(),
            _ => self.listing_route(),
        }
    }

    pub fn heading(&self) -> FormHeading {
        let kind = D::KIND;
        match self.mode {
            Mode::Edit { .. } => FormHeading {
                title: format!("Edit {}", kind.singular()),
                description: format!("Edit {} details", kind.singular()),
                action: "Save changes".to_string(),
            },
            Mode::Create => FormHeading {
                title: format!("Create {}", kind.singular()),
                description: format!("Create a new {}", kind.singular()),
                action: format!("Create {}", kind.singular()),
            },
        }
    }

    /// Validate the draft and dispatch the create-or-update mutation.
    ///
    /// No-op while a mutation is in flight; the UI disables the trigger, but
    /// the controller does not rely on it. A rejected draft records its
    /// field errors and dispatches nothing.
    pub fn submit(&mut self) -> Vec<Effect<D::Payload>> {
        if !self.phase.is_idle() {
            debug!(kind = %D::KIND, "submit ignored, mutation in flight");
            return Vec::new();
        }
        match self.draft.validate() {
            Err(errors) => {
                debug!(kind = %D::KIND, fields = errors.fields().count(), "submit rejected");
                self.field_errors = errors;
                Vec::new()
            }
            Ok(payload) => {
                self.field_errors = FieldErrors::default();
                self.phase = Phase::Submitting;
                let request = match self.mode {
                    Mode::Create => MutationRequest::Create { payload },
                    Mode::Edit { id } => MutationRequest::Update { id, payload },
                };
                vec![Effect::Mutate(request)]
            }
        }
    }

    /// Apply the outcome of the mutation dispatched by [`Self::submit`].
    /// Ignored unless a submit is actually in flight.
    pub fn resolve_submit(&mut self, outcome: MutationOutcome) -> Vec<Effect<D::Payload>> {
        if self.phase != Phase::Submitting {
            debug!(kind = %D::KIND, "stale submit resolution ignored");
            return Vec::new();
        }
        self.phase = Phase::Idle;
        match outcome {
            MutationOutcome::Success => vec![
                Effect::RefreshListing,
                Effect::Navigate(self.listing_route()),
                Effect::NotifySuccess(match self.mode {
                    Mode::Create => format!("{} created", D::KIND.display_name()),
                    Mode::Edit { .. } => format!("{} updated", D::KIND.display_name()),
                }),
            ],
            // Draft and mode are untouched so the user can edit and retry
            MutationOutcome::Failure => {
                vec![Effect::NotifyFailure("Something went wrong".to_string())]
            }
        }
    }

    /// Open the delete confirmation. Only meaningful in edit mode; there is
    /// nothing to delete before the record exists.
    pub fn request_delete(&mut self) {
        if matches!(self.mode, Mode::Edit { .. }) {
            self.confirm_open = true;
        }
    }

    /// Close the confirmation without deleting
    pub fn cancel_delete(&mut self) {
        self.confirm_open = false;
    }

    /// Dispatch the delete mutation once the user has confirmed.
    /// Requires an open dialog and no mutation in flight.
    pub fn confirm_delete(&mut self) -> Vec<Effect<D::Payload>> {
        let Mode::Edit { id } = self.mode else {
            return Vec::new();
        };
        if !self.confirm_open || !self.phase.is_idle() {
            return Vec::new();
        }
        self.phase = Phase::Deleting;
        vec![Effect::Mutate(MutationRequest::Delete { id })]
    }

    /// Apply the outcome of the mutation dispatched by
    /// [`Self::confirm_delete`]; closes the dialog either way
    pub fn resolve_delete(&mut self, outcome: MutationOutcome) -> Vec<Effect<D::Payload>> {
        if self.phase != Phase::Deleting {
            debug!(kind = %D::KIND, "stale delete resolution ignored");
            return Vec::new();
        }
        self.phase = Phase::Idle;
        self.confirm_open = false;
        match outcome {
            MutationOutcome::Success => vec![
                Effect::RefreshListing,
                Effect::Navigate(self.delete_landing_route()),
                Effect::NotifySuccess(format!("{} deleted", D::KIND.display_name())),
            ],
            MutationOutcome::Failure => {
                vec![Effect::NotifyFailure(delete_conflict_hint(D::KIND).to_string())]
            }
        }
    }
}

/// Hint shown when a delete fails. The API exposes no error codes, so this
/// assumes the common cause: records still referencing the entity.
fn delete_conflict_hint(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Billboard => {
            "Make sure you removed all categories using this billboard first."
        }
        ResourceKind::Category => "Make sure you removed all products using this category first.",
        ResourceKind::Product => "Make sure you removed all orders using this product first.",
        ResourceKind::Size => "Make sure you removed all products using this size first.",
        ResourceKind::Color => "Make sure you removed all products using this color first.",
    }
}
