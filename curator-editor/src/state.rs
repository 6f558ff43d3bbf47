use std::sync::{Arc, Mutex};

use curator_core::bulk::EditGalleriesDialog;
use curator_core::i18n::MessageCatalog;
use curator_core::services::GalleryUpdater;
use curator_model::prelude::*;

use crate::dialog::choices::DialogChoices;
use crate::toast::ToastManager;

/// Slot the dialog's close callback writes its `applied` flag into.
type CloseSlot = Arc<Mutex<Option<bool>>>;

pub struct State {
    pub dialog: EditGalleriesDialog,
    pub selection: Vec<SelectedGallery>,
    pub choices: DialogChoices,
    pub catalog: Arc<MessageCatalog>,
    pub updater: Arc<dyn GalleryUpdater>,
    pub toasts: ToastManager,
    pub studio_draft: String,
    pub performer_draft: String,
    pub tag_draft: String,
    closed: CloseSlot,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("dialog", &self.dialog)
            .field("selection", &self.selection.len())
            .field("toasts", &self.toasts)
            .field("closed", &self.closed())
            .finish()
    }
}

impl State {
    pub fn new(
        selection: Vec<SelectedGallery>,
        updater: Arc<dyn GalleryUpdater>,
        catalog: Arc<MessageCatalog>,
    ) -> Self {
        let closed: CloseSlot = Arc::new(Mutex::new(None));
        let dialog = open_dialog(&selection, &closed);
        Self {
            dialog,
            choices: DialogChoices::from_selection(&selection),
            selection,
            catalog,
            updater,
            toasts: ToastManager::default(),
            studio_draft: String::new(),
            performer_draft: String::new(),
            tag_draft: String::new(),
            closed,
        }
    }

    /// `Some(applied)` once the dialog has closed.
    pub fn closed(&self) -> Option<bool> {
        match self.closed.lock() {
            Ok(slot) => *slot,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Opens a fresh dialog over the same selection.
    pub fn reopen(&mut self) {
        self.closed = Arc::new(Mutex::new(None));
        self.dialog = open_dialog(&self.selection, &self.closed);
        self.choices = DialogChoices::from_selection(&self.selection);
        self.studio_draft.clear();
        self.performer_draft.clear();
        self.tag_draft.clear();
    }
}

fn open_dialog(
    selection: &[SelectedGallery],
    closed: &CloseSlot,
) -> EditGalleriesDialog {
    let sink = Arc::clone(closed);
    EditGalleriesDialog::new(selection, move |applied| {
        log::debug!("Dialog closed (applied: {})", applied);
        match sink.lock() {
            Ok(mut slot) => *slot = Some(applied),
            Err(poisoned) => *poisoned.into_inner() = Some(applied),
        }
    })
}
