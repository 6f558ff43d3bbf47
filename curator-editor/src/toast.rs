//! Toast notifications.
//!
//! [`ToastRelay`] is the [`Notifier`] handed to the dialog; the update loop
//! drains it into the [`ToastManager`] the overlay renders from.

use std::sync::Mutex;
use std::time::Duration;

use curator_core::error::CuratorError;
use curator_core::services::Notifier;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Length, Padding};

use crate::messages::Message;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, newest last.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Removes a toast; dismissing one that is already gone is a no-op.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Collects notifications raised while the dialog settles a submit.
#[derive(Debug, Default)]
pub struct ToastRelay {
    pending: Mutex<Vec<(ToastLevel, String)>>,
}

impl ToastRelay {
    fn record(&self, level: ToastLevel, message: String) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push((level, message)),
            Err(poisoned) => poisoned.into_inner().push((level, message)),
        }
    }

    /// Moves everything collected so far into `manager`.
    pub fn drain_into(&self, manager: &mut ToastManager) -> Vec<ToastId> {
        let pending = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        pending
            .into_iter()
            .map(|(level, message)| manager.push(level, message))
            .collect()
    }
}

impl Notifier for ToastRelay {
    fn success(&self, message: &str) {
        log::info!("Toast: {}", message);
        self.record(ToastLevel::Success, message.to_string());
    }

    fn error(&self, error: &CuratorError) {
        log::warn!("Toast error: {}", error);
        self.record(ToastLevel::Error, error.to_string());
    }
}

/// Renders active toasts in the top-right corner.
pub fn view_toast_overlay(manager: &ToastManager) -> Element<'_, Message> {
    if manager.is_empty() {
        return Space::new().width(0).height(0).into();
    }

    let toasts: Vec<Element<'_, Message>> = manager
        .toasts()
        .iter()
        .map(view_single_toast)
        .collect();

    container(column(toasts).spacing(8).width(Length::Shrink))
        .width(Length::Fill)
        .padding(Padding {
            top: 16.0,
            right: 20.0,
            bottom: 0.0,
            left: 20.0,
        })
        .align_x(Alignment::End)
        .into()
}

fn view_single_toast(toast: &Toast) -> Element<'_, Message> {
    let (background, border) = match toast.level {
        ToastLevel::Success => {
            (Color::from_rgb(0.1, 0.3, 0.1), Color::from_rgb(0.3, 0.8, 0.4))
        }
        ToastLevel::Error => {
            (Color::from_rgb(0.3, 0.1, 0.1), Color::from_rgb(0.9, 0.3, 0.3))
        }
    };

    let dismiss = button(text("x").size(13))
        .padding(4)
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: Color::from_rgb(0.7, 0.7, 0.7),
            ..Default::default()
        })
        .on_press(Message::DismissToast(toast.id));

    let content = row![
        text(toast.message.as_str()).size(13).color(Color::WHITE),
        Space::new().width(12),
        dismiss,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding::new(10.0).right(14.0).left(14.0))
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_hands_toasts_to_the_manager_once() {
        let relay = ToastRelay::default();
        relay.success("Updated galleries");
        relay.error(&CuratorError::GraphQl("nope".into()));

        let mut manager = ToastManager::default();
        let ids = relay.drain_into(&mut manager);
        assert_eq!(ids.len(), 2);
        assert_eq!(manager.toasts()[0].level, ToastLevel::Success);
        assert_eq!(manager.toasts()[1].message, "GraphQL error: nope");

        assert!(relay.drain_into(&mut manager).is_empty());
        assert_eq!(manager.toasts().len(), 2);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = ToastManager::default();
        let first = manager.push(ToastLevel::Success, "a");
        let second = manager.push(ToastLevel::Error, "b");
        assert_ne!(first, second);
        assert!(manager.dismiss(first));
        assert!(!manager.dismiss(first));
        assert_eq!(manager.toasts().len(), 1);
    }
}
