//! Message handling of the editor, driven without a window.

use std::sync::Arc;

use async_trait::async_trait;
use curator_core::bulk::SubmitState;
use curator_core::error::CuratorError;
use curator_core::i18n::MessageCatalog;
use curator_core::services::GalleryUpdater;
use curator_editor::dialog::choices::Choice;
use curator_editor::messages::{Message, SubmitFailure};
use curator_editor::state::State;
use curator_editor::toast::ToastLevel;
use curator_editor::update::update;
use curator_model::prelude::*;

struct EchoUpdater;

#[async_trait]
impl GalleryUpdater for EchoUpdater {
    async fn bulk_gallery_update(
        &self,
        input: BulkGalleryUpdateInput,
    ) -> curator_core::Result<Vec<GalleryID>> {
        Ok(input.ids)
    }
}

fn performer(raw: &str) -> PerformerID {
    PerformerID::new(raw).unwrap()
}

fn state() -> State {
    let selection = vec![
        SelectedGallery::new(GalleryID::new("1").unwrap())
            .with_title("A")
            .with_rating(5)
            .with_performer(performer("p1"), "Ann"),
        SelectedGallery::new(GalleryID::new("2").unwrap())
            .with_title("A")
            .with_rating(3)
            .with_performer(performer("p1"), "Ann")
            .with_performer(performer("p2"), "Bea"),
    ];
    State::new(
        selection,
        Arc::new(EchoUpdater),
        Arc::new(MessageCatalog::english()),
    )
}

#[test]
fn clicking_the_lit_star_clears_the_rating() {
    let mut state = state();
    let _ = update(&mut state, Message::StarClicked(Rating::new(4)));
    assert_eq!(state.dialog.update_input().rating, Some(Some(Rating::new(4))));

    let _ = update(&mut state, Message::StarClicked(Rating::new(4)));
    assert_eq!(state.dialog.update_input().rating, Some(None));
}

#[test]
fn title_typing_is_sent() {
    let mut state = state();
    let _ = update(&mut state, Message::TitleChanged("B".into()));
    assert_eq!(state.dialog.update_input().title.as_deref(), Some("B"));
}

#[test]
fn performer_picks_and_removals_reach_the_form() {
    let mut state = state();
    let bea = state
        .choices
        .performers
        .iter()
        .find(|choice| choice.id == performer("p2"))
        .cloned()
        .unwrap();

    let _ = update(&mut state, Message::PerformerPicked(bea));
    let _ = update(
        &mut state,
        Message::PerformerPicked(Choice {
            id: performer("p2"),
            name: "Bea".into(),
        }),
    );
    assert_eq!(state.dialog.form().performers.ids(), &[performer("p2")]);

    let _ = update(&mut state, Message::PerformerModeChanged(BulkUpdateIdMode::Remove));
    let input = state.dialog.update_input();
    assert_eq!(
        input.performer_ids,
        Some(BulkUpdateIds::new(BulkUpdateIdMode::Remove, vec![performer("p2")]))
    );

    let _ = update(&mut state, Message::PerformerRemoved(performer("p2")));
    assert!(state.dialog.form().performers.ids().is_empty());
}

#[test]
fn typed_ids_are_added_and_blank_drafts_ignored() {
    let mut state = state();
    let _ = update(&mut state, Message::TagDraftChanged("   ".into()));
    let _ = update(&mut state, Message::TagDraftSubmitted);
    assert!(state.dialog.form().tags.ids().is_empty());

    let _ = update(&mut state, Message::TagDraftChanged(" t9 ".into()));
    let _ = update(&mut state, Message::TagDraftSubmitted);
    let t9 = TagID::new("t9").unwrap();
    assert_eq!(state.dialog.form().tags.ids(), &[t9.clone()]);
    assert_eq!(state.choices.tag_name(&t9), "t9");
    assert!(state.tag_draft.is_empty());
}

#[test]
fn studio_outside_the_selection_can_be_set_by_id() {
    let mut state = state();
    assert!(state.choices.studios.is_empty());

    let _ = update(&mut state, Message::StudioDraftChanged("  ".into()));
    let _ = update(&mut state, Message::StudioDraftSubmitted);
    assert_eq!(state.dialog.update_input().studio_id, None);

    let _ = update(&mut state, Message::StudioDraftChanged(" s9 ".into()));
    let _ = update(&mut state, Message::StudioDraftSubmitted);
    let s9 = StudioID::new("s9").unwrap();
    assert_eq!(state.dialog.update_input().studio_id, Some(Some(s9.clone())));
    assert_eq!(state.choices.studio_name(&s9), "s9");
    assert!(state.studio_draft.is_empty());
}

#[test]
fn successful_submit_closes_with_a_toast() {
    let mut state = state();
    let _ = update(&mut state, Message::StarClicked(Rating::new(4)));
    let _ = update(&mut state, Message::Submit);
    assert_eq!(state.dialog.state(), SubmitState::Submitting);

    // Inputs are ignored while the update is in flight.
    let _ = update(&mut state, Message::TitleChanged("late".into()));
    assert!(!state.dialog.form().title.is_edited());

    let ids = state.dialog.ids().to_vec();
    let _ = update(&mut state, Message::SubmitFinished(Ok(ids)));

    assert_eq!(state.dialog.state(), SubmitState::Succeeded);
    assert_eq!(state.closed(), Some(true));
    let toasts = state.toasts.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "Updated galleries");
}

#[test]
fn failed_submit_keeps_the_dialog_open() {
    let mut state = state();
    let _ = update(&mut state, Message::TitleChanged("B".into()));
    let _ = update(&mut state, Message::Submit);
    let failure = SubmitFailure::from(CuratorError::GraphQl("denied".into()));
    let _ = update(&mut state, Message::SubmitFinished(Err(failure)));

    assert_eq!(state.dialog.state(), SubmitState::Idle);
    assert_eq!(state.closed(), None);
    assert_eq!(state.dialog.last_error(), Some("GraphQL error: denied"));
    assert_eq!(state.dialog.update_input().title.as_deref(), Some("B"));

    let toast = &state.toasts.toasts()[0];
    assert_eq!(toast.level, ToastLevel::Error);
    let id = toast.id;
    let _ = update(&mut state, Message::DismissToast(id));
    assert!(state.toasts.is_empty());
}

#[test]
fn stale_results_are_dropped() {
    let mut state = state();
    let _ = update(&mut state, Message::SubmitFinished(Ok(Vec::new())));
    assert_eq!(state.dialog.state(), SubmitState::Idle);
    assert!(state.toasts.is_empty());
}

#[test]
fn cancel_then_reopen_starts_fresh() {
    let mut state = state();
    let _ = update(&mut state, Message::OrganizedClicked);
    let _ = update(&mut state, Message::Cancel);
    assert_eq!(state.closed(), Some(false));
    assert_eq!(state.dialog.state(), SubmitState::Cancelled);

    let _ = update(&mut state, Message::Reopen);
    assert_eq!(state.closed(), None);
    assert_eq!(state.dialog.state(), SubmitState::Idle);
    assert!(state.dialog.form().is_pristine());
}

#[test]
fn reopen_is_ignored_while_open() {
    let mut state = state();
    let _ = update(&mut state, Message::TitleChanged("keep".into()));
    let _ = update(&mut state, Message::Reopen);
    assert_eq!(state.dialog.update_input().title.as_deref(), Some("keep"));
}

#[test]
fn message_names_are_stable() {
    assert_eq!(Message::Submit.name(), "Dialog::Submit");
    assert_eq!(
        Message::Form(curator_core::bulk::FormEdit::CycleOrganized).name(),
        "Form::CycleOrganized"
    );
}
