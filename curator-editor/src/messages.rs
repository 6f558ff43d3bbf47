use std::sync::Arc;

use curator_core::bulk::FormEdit;
use curator_core::error::CuratorError;
use curator_model::prelude::*;

use crate::dialog::choices::{Choice, StudioChoice};
use crate::toast::ToastId;

/// A failed update, shareable so the message stays `Clone`.
#[derive(Debug, Clone)]
pub struct SubmitFailure(pub Arc<CuratorError>);

impl SubmitFailure {
    /// Recovers the owned error; a still-shared one is re-described.
    pub fn into_error(self) -> CuratorError {
        Arc::try_unwrap(self.0)
            .unwrap_or_else(|shared| CuratorError::Internal(shared.to_string()))
    }
}

impl From<CuratorError> for SubmitFailure {
    fn from(error: CuratorError) -> Self {
        SubmitFailure(Arc::new(error))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    /// Clicking the star that is already lit clears the rating.
    StarClicked(Rating),
    StudioPicked(StudioChoice),
    StudioDraftChanged(String),
    StudioDraftSubmitted,

    PerformerPicked(Choice<PerformerID>),
    PerformerRemoved(PerformerID),
    PerformerModeChanged(BulkUpdateIdMode),
    PerformerDraftChanged(String),
    PerformerDraftSubmitted,

    TagPicked(Choice<TagID>),
    TagRemoved(TagID),
    TagModeChanged(BulkUpdateIdMode),
    TagDraftChanged(String),
    TagDraftSubmitted,

    OrganizedClicked,

    Submit,
    SubmitFinished(Result<Vec<GalleryID>, SubmitFailure>),
    Cancel,
    Reopen,

    DismissToast(ToastId),

    /// Raw form edit, used by hosts and tests that bypass the widgets.
    Form(FormEdit),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TitleChanged(_) => "Dialog::TitleChanged",
            Self::StarClicked(_) => "Dialog::StarClicked",
            Self::StudioPicked(_) => "Dialog::StudioPicked",
            Self::StudioDraftChanged(_) => "Dialog::StudioDraftChanged",
            Self::StudioDraftSubmitted => "Dialog::StudioDraftSubmitted",
            Self::PerformerPicked(_) => "Dialog::PerformerPicked",
            Self::PerformerRemoved(_) => "Dialog::PerformerRemoved",
            Self::PerformerModeChanged(_) => "Dialog::PerformerModeChanged",
            Self::PerformerDraftChanged(_) => "Dialog::PerformerDraftChanged",
            Self::PerformerDraftSubmitted => "Dialog::PerformerDraftSubmitted",
            Self::TagPicked(_) => "Dialog::TagPicked",
            Self::TagRemoved(_) => "Dialog::TagRemoved",
            Self::TagModeChanged(_) => "Dialog::TagModeChanged",
            Self::TagDraftChanged(_) => "Dialog::TagDraftChanged",
            Self::TagDraftSubmitted => "Dialog::TagDraftSubmitted",
            Self::OrganizedClicked => "Dialog::OrganizedClicked",
            Self::Submit => "Dialog::Submit",
            Self::SubmitFinished(_) => "Dialog::SubmitFinished",
            Self::Cancel => "Dialog::Cancel",
            Self::Reopen => "Dialog::Reopen",
            Self::DismissToast(_) => "Toast::Dismiss",
            Self::Form(edit) => edit.name(),
        }
    }
}
