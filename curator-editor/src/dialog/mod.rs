//! Widgets for the bulk gallery edit dialog.

pub mod choices;
pub mod view;

pub use view::view_dialog;
