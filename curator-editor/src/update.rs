use std::sync::Arc;

use curator_core::bulk::FormEdit;
use curator_model::prelude::*;
use iced::Task;

use crate::messages::{Message, SubmitFailure};
use crate::state::State;
use crate::toast::{TOAST_TIMEOUT, ToastId, ToastRelay};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());

    match message {
        Message::TitleChanged(title) => edit(state, FormEdit::Title(title)),
        Message::StarClicked(star) => {
            let current = state
                .dialog
                .form()
                .display_rating(state.dialog.aggregate());
            let next = if current == Some(star) { None } else { Some(star) };
            edit(state, FormEdit::Rating(next))
        }
        Message::StudioPicked(choice) => edit(state, FormEdit::Studio(choice.id)),
        Message::StudioDraftChanged(draft) => {
            state.studio_draft = draft;
            Task::none()
        }
        Message::StudioDraftSubmitted => {
            if state.dialog.is_disabled() {
                return Task::none();
            }
            let draft = std::mem::take(&mut state.studio_draft);
            match StudioID::new(draft.trim()) {
                Ok(id) => {
                    state.choices.remember_studio(id.clone());
                    edit(state, FormEdit::Studio(Some(id)))
                }
                Err(err) => {
                    log::debug!("Ignoring studio draft: {}", err);
                    Task::none()
                }
            }
        }

        Message::PerformerPicked(choice) => {
            let mut ids = state.dialog.form().performers.ids().to_vec();
            ids.push(choice.id);
            edit(state, FormEdit::PerformerIds(ids))
        }
        Message::PerformerRemoved(id) => {
            let mut ids = state.dialog.form().performers.ids().to_vec();
            ids.retain(|picked| picked != &id);
            edit(state, FormEdit::PerformerIds(ids))
        }
        Message::PerformerModeChanged(mode) => {
            edit(state, FormEdit::PerformerMode(mode))
        }
        Message::PerformerDraftChanged(draft) => {
            state.performer_draft = draft;
            Task::none()
        }
        Message::PerformerDraftSubmitted => {
            if state.dialog.is_disabled() {
                return Task::none();
            }
            let draft = std::mem::take(&mut state.performer_draft);
            match PerformerID::new(draft.trim()) {
                Ok(id) => {
                    state.choices.remember_performer(id.clone());
                    let mut ids = state.dialog.form().performers.ids().to_vec();
                    ids.push(id);
                    edit(state, FormEdit::PerformerIds(ids))
                }
                Err(err) => {
                    log::debug!("Ignoring performer draft: {}", err);
                    Task::none()
                }
            }
        }

        Message::TagPicked(choice) => {
            let mut ids = state.dialog.form().tags.ids().to_vec();
            ids.push(choice.id);
            edit(state, FormEdit::TagIds(ids))
        }
        Message::TagRemoved(id) => {
            let mut ids = state.dialog.form().tags.ids().to_vec();
            ids.retain(|picked| picked != &id);
            edit(state, FormEdit::TagIds(ids))
        }
        Message::TagModeChanged(mode) => edit(state, FormEdit::TagMode(mode)),
        Message::TagDraftChanged(draft) => {
            state.tag_draft = draft;
            Task::none()
        }
        Message::TagDraftSubmitted => {
            if state.dialog.is_disabled() {
                return Task::none();
            }
            let draft = std::mem::take(&mut state.tag_draft);
            match TagID::new(draft.trim()) {
                Ok(id) => {
                    state.choices.remember_tag(id.clone());
                    let mut ids = state.dialog.form().tags.ids().to_vec();
                    ids.push(id);
                    edit(state, FormEdit::TagIds(ids))
                }
                Err(err) => {
                    log::debug!("Ignoring tag draft: {}", err);
                    Task::none()
                }
            }
        }

        Message::OrganizedClicked => edit(state, FormEdit::CycleOrganized),
        Message::Form(form_edit) => edit(state, form_edit),

        Message::Submit => match state.dialog.begin_submit() {
            Ok(input) => {
                let updater = Arc::clone(&state.updater);
                Task::perform(
                    async move {
                        updater
                            .bulk_gallery_update(input)
                            .await
                            .map_err(SubmitFailure::from)
                    },
                    Message::SubmitFinished,
                )
            }
            Err(err) => {
                log::warn!("Submit ignored: {}", err);
                Task::none()
            }
        },
        Message::SubmitFinished(result) => {
            let relay = ToastRelay::default();
            let result = result.map_err(SubmitFailure::into_error);
            if let Err(err) =
                state
                    .dialog
                    .finish_submit(result, &relay, state.catalog.as_ref())
            {
                log::warn!("Dropping stale submit result: {}", err);
            }
            let toasts = relay.drain_into(&mut state.toasts);
            Task::batch(toasts.into_iter().map(dismiss_later))
        }
        Message::Cancel => {
            if let Err(err) = state.dialog.cancel() {
                log::warn!("Cancel ignored: {}", err);
            }
            Task::none()
        }
        Message::Reopen => {
            if state.closed().is_some() {
                state.reopen();
            }
            Task::none()
        }

        Message::DismissToast(id) => {
            state.toasts.dismiss(id);
            Task::none()
        }
    }
}

fn edit(state: &mut State, form_edit: FormEdit) -> Task<Message> {
    if let Err(err) = state.dialog.apply(form_edit) {
        log::debug!("Edit ignored: {}", err);
    }
    Task::none()
}

fn dismiss_later(id: ToastId) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(TOAST_TIMEOUT).await },
        move |_| Message::DismissToast(id),
    )
}
