//! Drives a form controller against the live collaborators.
//!
//! The controller is pure and returns effects; the session executes them:
//! mutations go through the [`ResourceWriter`], the outcome is resolved back
//! into the controller, and the follow-up effects hit the router and the
//! notifier. Any writer error becomes a plain failure outcome, matching the
//! wire contract that carries no structured detail.

use std::sync::Arc;

use forms::{Effect, FormController, FormModel, MutationOutcome, MutationRequest};
use serde::Serialize;
use tracing::{debug, warn};

use super::sinks::{Navigator, Notifier};
use super::store_api::ResourceWriter;

pub struct FormSession<D: FormModel, W> {
    controller: FormController<D>,
    writer: W,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl<D, W> FormSession<D, W>
where
    D: FormModel,
    D::Payload: Serialize + Send + Sync,
    W: ResourceWriter<D::Payload>,
{
    pub fn new(
        controller: FormController<D>,
        writer: W,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            controller,
            writer,
            navigator,
            notifier,
        }
    }

    pub fn controller(&self) -> &FormController<D> {
        &self.controller
    }

    /// Field edits and other synchronous controller access
    pub fn controller_mut(&mut self) -> &mut FormController<D> {
        &mut self.controller
    }

    /// Validate and, if clean, run the create-or-update round-trip
    pub async fn submit(&mut self) {
        let Some(request) = into_mutation(self.controller.submit()) else {
            return;
        };
        let outcome = self.dispatch(&request).await;
        let effects = self.controller.resolve_submit(outcome);
        self.apply(effects);
    }

    pub fn request_delete(&mut self) {
        self.controller.request_delete();
    }

    pub fn cancel_delete(&mut self) {
        self.controller.cancel_delete();
    }

    /// Run the delete round-trip once the dialog has been confirmed
    pub async fn confirm_delete(&mut self) {
        let Some(request) = into_mutation(self.controller.confirm_delete()) else {
            return;
        };
        let outcome = self.dispatch(&request).await;
        let effects = self.controller.resolve_delete(outcome);
        self.apply(effects);
    }

    async fn dispatch(&self, request: &MutationRequest<D::Payload>) -> MutationOutcome {
        let result = match request {
            MutationRequest::Create { payload } => self.writer.create(payload).await,
            MutationRequest::Update { id, payload } => self.writer.update(*id, payload).await,
            MutationRequest::Delete { id } => self.writer.delete(*id).await,
        };
        match result {
            Ok(()) => {
                debug!(kind = %D::KIND, "mutation succeeded");
                MutationOutcome::Success
            }
            Err(error) => {
                warn!(kind = %D::KIND, %error, "mutation failed");
                MutationOutcome::Failure
            }
        }
    }

    fn apply(&self, effects: Vec<Effect<D::Payload>>) {
        for effect in effects {
            match effect {
                // Resolutions never dispatch a second mutation
                Effect::Mutate(_) => {}
                Effect::RefreshListing => self.navigator.refresh_listing(),
                Effect::Navigate(path) => self.navigator.go_to(&path),
                Effect::NotifySuccess(message) => self.notifier.success(&message),
                Effect::NotifyFailure(message) => self.notifier.failure(&message),
            }
        }
    }
}

fn into_mutation<P>(effects: Vec<Effect<P>>) -> Option<MutationRequest<P>> {
    effects.into_iter().find_map(|effect| match effect {
        Effect::Mutate(request) => Some(request),
        _ => None,
    })
}
