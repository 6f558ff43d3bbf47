use curator_core::bulk::{MultiSetField, TriState};
use curator_core::services::Translator;
use curator_model::prelude::*;
use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Color, Element, Length};

use crate::dialog::choices::{Choice, ModeChoice};
use crate::messages::Message;
use crate::state::State;

const LABEL_WIDTH: f32 = 110.0;
const TEXT_SUBDUED: Color = Color::from_rgb(0.6, 0.6, 0.65);
const ERROR: Color = Color::from_rgb(0.9, 0.35, 0.35);
const STAR_LIT: Color = Color::from_rgb(0.98, 0.78, 0.2);

/// Messages one set-field editor emits.
struct SetMessages<Id> {
    picked: fn(Choice<Id>) -> Message,
    removed: fn(Id) -> Message,
    mode: fn(BulkUpdateIdMode) -> Message,
    draft: fn(String) -> Message,
    draft_submitted: Message,
}

pub fn view_dialog(state: &State) -> Element<'_, Message> {
    let dialog = &state.dialog;
    let catalog = state.catalog.as_ref();
    let aggregate = dialog.aggregate();
    let form = dialog.form();
    let disabled = dialog.is_disabled();

    let count = dialog.ids().len().to_string();
    let header = column![
        text(dialog.header(catalog)).size(22),
        text(catalog.message("dialogs.selection_summary", &[("count", count.as_str())]))
            .size(13)
            .color(TEXT_SUBDUED),
    ]
    .spacing(4);

    let title_input = text_input(
        &catalog.text("dialogs.bulk_title_placeholder"),
        &form.display_title(aggregate),
    )
    .on_input_maybe((!disabled).then_some(Message::TitleChanged))
    .padding(8)
    .width(Length::Fill);

    let rating = star_row(form.display_rating(aggregate), disabled);

    let none_label = catalog.text("dialogs.no_studio");
    let current_studio = form.display_studio(aggregate);
    let selected_studio =
        state.choices.studio_option(current_studio.as_ref(), &none_label);
    let studio: Element<'_, Message> = if disabled {
        text(selected_studio.label).into()
    } else {
        row![
            pick_list(
                state.choices.studio_options(&none_label),
                Some(selected_studio),
                Message::StudioPicked,
            )
            .width(Length::Fixed(260.0)),
            text_input(&catalog.text("dialogs.add_by_id"), &state.studio_draft)
                .on_input(Message::StudioDraftChanged)
                .on_submit(Message::StudioDraftSubmitted)
                .padding(6)
                .width(Length::Fixed(160.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    };

    let performers = set_editor(
        catalog,
        &form.performers,
        &state.choices.performers,
        |id| state.choices.performer_name(id).to_string(),
        &state.performer_draft,
        disabled,
        SetMessages {
            picked: Message::PerformerPicked,
            removed: Message::PerformerRemoved,
            mode: Message::PerformerModeChanged,
            draft: Message::PerformerDraftChanged,
            draft_submitted: Message::PerformerDraftSubmitted,
        },
    );

    let tags = set_editor(
        catalog,
        &form.tags,
        &state.choices.tags,
        |id| state.choices.tag_name(id).to_string(),
        &state.tag_draft,
        disabled,
        SetMessages {
            picked: Message::TagPicked,
            removed: Message::TagRemoved,
            mode: Message::TagModeChanged,
            draft: Message::TagDraftChanged,
            draft_submitted: Message::TagDraftSubmitted,
        },
    );

    let organized = organized_control(
        form.organized,
        catalog.text("organized"),
        disabled,
    );

    let error: Element<'_, Message> = match dialog.last_error() {
        Some(message) => text(message.to_string()).size(13).color(ERROR).into(),
        None => Space::new().height(0).into(),
    };

    let apply_label = if disabled {
        catalog.text("dialogs.saving")
    } else {
        catalog.text("actions.apply")
    };
    let footer = row![
        Space::new().width(Length::Fill),
        button(text(catalog.text("actions.cancel")))
            .on_press_maybe((!disabled).then_some(Message::Cancel))
            .padding([8, 16])
            .style(button::secondary),
        button(text(apply_label))
            .on_press_maybe((!disabled).then_some(Message::Submit))
            .padding([8, 16])
            .style(button::primary),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let form_rows = column![
        field_row(catalog.text("title"), title_input.into()),
        field_row(catalog.text("rating"), rating),
        field_row(catalog.text("studio"), studio),
        field_row(catalog.text("performers"), performers),
        field_row(catalog.text("tags"), tags),
        organized,
    ]
    .spacing(16);

    let content = column![
        header,
        scrollable(form_rows).height(Length::Fill),
        error,
        footer,
    ]
    .spacing(20)
    .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn field_row<'a>(
    label: String,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        text(label).size(14).width(Length::Fixed(LABEL_WIDTH)),
        control,
    ]
    .spacing(12)
    .align_y(Alignment::Start)
    .into()
}

fn star_row<'a>(rating: Option<Rating>, disabled: bool) -> Element<'a, Message> {
    let lit = rating.map(|r| r.value()).unwrap_or(0);
    let stars = (1..=Rating::MAX_STARS).map(|star| {
        let glyph = if star <= lit { "\u{2605}" } else { "\u{2606}" };
        button(text(glyph).size(20).color(if star <= lit {
            STAR_LIT
        } else {
            TEXT_SUBDUED
        }))
        .padding(2)
        .style(button::text)
        .on_press_maybe(
            (!disabled).then_some(Message::StarClicked(Rating::new(star))),
        )
        .into()
    });
    row(stars).spacing(2).align_y(Alignment::Center).into()
}

/// Tri-state checkbox drawn as a button; indeterminate gets its own glyph.
fn organized_control<'a>(
    value: TriState,
    label: String,
    disabled: bool,
) -> Element<'a, Message> {
    let glyph = match value {
        TriState::Checked => "[x]",
        TriState::Indeterminate => "[-]",
        TriState::Unchecked => "[ ]",
    };
    button(
        row![text(glyph).size(15), text(label).size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([4, 0])
    .style(button::text)
    .on_press_maybe((!disabled).then_some(Message::OrganizedClicked))
    .into()
}

fn set_editor<'a, Id>(
    catalog: &dyn Translator,
    field: &'a MultiSetField<Id>,
    choices: &'a [Choice<Id>],
    name_of: impl Fn(&Id) -> String,
    draft: &'a str,
    disabled: bool,
    messages: SetMessages<Id>,
) -> Element<'a, Message>
where
    Id: Clone + PartialEq + std::fmt::Display + 'static,
{
    let modes = ModeChoice::all(|mode| catalog.text(mode.label_key()));
    let selected_mode = modes
        .iter()
        .find(|choice| choice.mode == field.mode())
        .cloned();
    let mode_picker: Element<'a, Message> = if disabled {
        text(selected_mode.map(|m| m.label).unwrap_or_default())
            .size(13)
            .into()
    } else {
        let on_mode = messages.mode;
        pick_list(modes, selected_mode, move |choice: ModeChoice| {
            on_mode(choice.mode)
        })
        .width(Length::Fixed(140.0))
        .into()
    };

    let mut chips = row![].spacing(6).align_y(Alignment::Center);
    for id in field.ids() {
        let on_remove = messages.removed;
        chips = chips.push(
            button(text(format!("{} x", name_of(id))).size(13))
                .padding([4, 10])
                .style(button::secondary)
                .on_press_maybe((!disabled).then(|| on_remove(id.clone()))),
        );
    }

    let mut editor = column![mode_picker, chips].spacing(8);

    if !field.existing().is_empty() {
        let shared = field
            .existing()
            .iter()
            .map(&name_of)
            .collect::<Vec<_>>()
            .join(", ");
        editor = editor.push(
            text(format!("{}: {}", catalog.text("dialogs.common_to_all"), shared))
                .size(12)
                .color(TEXT_SUBDUED),
        );
    }

    if !disabled {
        let available: Vec<Choice<Id>> = choices
            .iter()
            .filter(|choice| !field.ids().contains(&choice.id))
            .cloned()
            .collect();
        let adder = row![
            pick_list(available, None::<Choice<Id>>, messages.picked)
                .placeholder(catalog.text("actions.add"))
                .width(Length::Fixed(180.0)),
            text_input(&catalog.text("dialogs.add_by_id"), draft)
                .on_input(messages.draft)
                .on_submit(messages.draft_submitted)
                .padding(6)
                .width(Length::Fixed(160.0)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);
        editor = editor.push(adder);
    }

    editor.into()
}
