//! iced front end for the Curator bulk gallery editor.
//!
//! The headless dialog lives in `curator_core::bulk`; this crate owns the
//! window, turns widget events into [`messages::Message`]s and runs the
//! update call on the toolkit's tokio runtime.

pub mod app;
pub mod dialog;
pub mod messages;
pub mod selection;
pub mod state;
pub mod toast;
pub mod update;
pub mod view;
