use curator_core::services::Translator;
use iced::widget::{Stack, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::dialog;
use crate::messages::Message;
use crate::state::State;
use crate::toast::view_toast_overlay;

pub fn view(state: &State) -> Element<'_, Message> {
    let content = match state.closed() {
        Some(applied) => view_closed(state, applied),
        None => dialog::view_dialog(state),
    };

    Stack::new()
        .push(content)
        .push(view_toast_overlay(&state.toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Shown once the dialog has closed, so the outcome toast stays visible.
fn view_closed(state: &State, applied: bool) -> Element<'_, Message> {
    let catalog = state.catalog.as_ref();
    let summary = if applied {
        let count = state.dialog.ids().len().to_string();
        catalog.message("dialogs.closed_applied", &[("count", count.as_str())])
    } else {
        catalog.text("dialogs.closed_cancelled")
    };

    let content = column![
        text(summary).size(18),
        button(text(catalog.text("actions.edit_again")))
            .on_press(Message::Reopen)
            .padding([8, 16])
            .style(button::secondary),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
