//! Bulk edit dialog: selection, form, and the submit/cancel state machine.
//!
//! The dialog is driven from a single UI thread. Submitting sets a busy flag
//! that disables every input until the update call settles; there is no way
//! to abort an in-flight update.

use curator_contracts::gallery_like::GalleryLike;
use curator_model::bulk::BulkGalleryUpdateInput;
use curator_model::ids::GalleryID;
use tracing::{debug, info, warn};

use super::aggregate::{GalleryAggregate, aggregate};
use super::diff::build_update_input;
use super::form::{FormEdit, GalleryForm};
use crate::error::{DialogError, Result};
use crate::services::{GalleryUpdater, Notifier, Translator};

/// Invoked once when the dialog closes; the flag tells whether an update was
/// applied.
pub type CloseCallback = Box<dyn FnMut(bool) + Send>;

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Cancelled,
}

impl SubmitState {
    pub fn is_closed(self) -> bool {
        matches!(self, SubmitState::Succeeded | SubmitState::Cancelled)
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The update went through and the dialog closed.
    Applied { updated: usize },
    /// The update was rejected; the dialog is editable again.
    Failed { message: String },
}

pub struct EditGalleriesDialog {
    ids: Vec<GalleryID>,
    aggregate: GalleryAggregate,
    form: GalleryForm,
    state: SubmitState,
    last_error: Option<String>,
    on_close: CloseCallback,
}

impl std::fmt::Debug for EditGalleriesDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditGalleriesDialog")
            .field("selected", &self.ids.len())
            .field("aggregate", &self.aggregate)
            .field("form", &self.form)
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl EditGalleriesDialog {
    pub fn new<G: GalleryLike>(
        selection: &[G],
        on_close: impl FnMut(bool) + Send + 'static,
    ) -> Self {
        let aggregate = aggregate(selection);
        let form = GalleryForm::from_aggregate(&aggregate);
        Self {
            ids: selection.iter().map(|g| g.gallery_id().clone()).collect(),
            aggregate,
            form,
            state: SubmitState::Idle,
            last_error: None,
            on_close: Box::new(on_close),
        }
    }

    pub fn ids(&self) -> &[GalleryID] {
        &self.ids
    }

    pub fn aggregate(&self) -> &GalleryAggregate {
        &self.aggregate
    }

    pub fn form(&self) -> &GalleryForm {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Message of the most recent rejected update, cleared on the next edit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Inputs are disabled while an update is in flight or after closing.
    pub fn is_disabled(&self) -> bool {
        self.state != SubmitState::Idle
    }

    fn ensure_idle(&self) -> std::result::Result<(), DialogError> {
        match self.state {
            SubmitState::Idle => Ok(()),
            SubmitState::Submitting => Err(DialogError::Busy),
            SubmitState::Succeeded | SubmitState::Cancelled => {
                Err(DialogError::Closed)
            }
        }
    }

    /// Re-aggregates a new selection and resets the form.
    pub fn set_selection<G: GalleryLike>(
        &mut self,
        selection: &[G],
    ) -> std::result::Result<(), DialogError> {
        self.ensure_idle()?;
        self.ids = selection.iter().map(|g| g.gallery_id().clone()).collect();
        self.aggregate = aggregate(selection);
        self.form = GalleryForm::from_aggregate(&self.aggregate);
        self.last_error = None;
        Ok(())
    }

    /// Applies one user edit. Rejected while submitting.
    pub fn apply(
        &mut self,
        edit: FormEdit,
    ) -> std::result::Result<(), DialogError> {
        self.ensure_idle()?;
        debug!("Bulk gallery edit: {}", edit.name());
        self.form.apply(edit);
        self.last_error = None;
        Ok(())
    }

    /// Payload the current form state would submit.
    pub fn update_input(&self) -> BulkGalleryUpdateInput {
        build_update_input(self.ids.clone(), &self.form)
    }

    /// `Idle -> Submitting`. Returns the payload to send.
    pub fn begin_submit(
        &mut self,
    ) -> std::result::Result<BulkGalleryUpdateInput, DialogError> {
        self.ensure_idle()?;
        let input = self.update_input();
        info!(
            "Submitting bulk update for {} galleries (noop: {})",
            input.ids.len(),
            input.is_noop()
        );
        self.state = SubmitState::Submitting;
        Ok(input)
    }

    /// Settles a submit started with [`Self::begin_submit`].
    ///
    /// Success notifies, closes the dialog and reports `applied = true`.
    /// Failure notifies with the error and returns the dialog to `Idle`
    /// with the form as it was.
    pub fn finish_submit(
        &mut self,
        result: Result<Vec<GalleryID>>,
        notifier: &dyn Notifier,
        translator: &dyn Translator,
    ) -> std::result::Result<SubmitOutcome, DialogError> {
        if self.state != SubmitState::Submitting {
            return Err(if self.state.is_closed() {
                DialogError::Closed
            } else {
                DialogError::NotSubmitting
            });
        }

        match result {
            Ok(updated) => {
                info!("Bulk update applied to {} galleries", updated.len());
                let entity = translator.text("galleries").to_lowercase();
                notifier.success(&translator.message(
                    "toast.updated_entity",
                    &[("entity", entity.as_str())],
                ));
                self.state = SubmitState::Succeeded;
                (self.on_close)(true);
                Ok(SubmitOutcome::Applied {
                    updated: updated.len(),
                })
            }
            Err(error) => {
                warn!("Bulk gallery update failed: {}", error);
                notifier.error(&error);
                let message = error.to_string();
                self.last_error = Some(message.clone());
                self.state = SubmitState::Idle;
                Ok(SubmitOutcome::Failed { message })
            }
        }
    }

    /// Runs the whole submit flow against injected collaborators.
    pub async fn submit(
        &mut self,
        updater: &dyn GalleryUpdater,
        notifier: &dyn Notifier,
        translator: &dyn Translator,
    ) -> std::result::Result<SubmitOutcome, DialogError> {
        let input = self.begin_submit()?;
        let result = updater.bulk_gallery_update(input).await;
        self.finish_submit(result, notifier, translator)
    }

    /// Closes without applying anything. Only allowed while idle.
    pub fn cancel(&mut self) -> std::result::Result<(), DialogError> {
        self.ensure_idle()?;
        info!("Bulk gallery edit cancelled");
        self.form = GalleryForm::from_aggregate(&self.aggregate);
        self.last_error = None;
        self.state = SubmitState::Cancelled;
        (self.on_close)(false);
        Ok(())
    }

    /// Dialog title, e.g. "Edit 3 Galleries".
    pub fn header(&self, translator: &dyn Translator) -> String {
        let count = self.ids.len().max(1).to_string();
        let singular = translator.text("gallery");
        let plural = translator.text("galleries");
        translator.message(
            "dialogs.edit_entity_title",
            &[
                ("count", count.as_str()),
                ("singularEntity", singular.as_str()),
                ("pluralEntity", plural.as_str()),
            ],
        )
    }
}

