//! Bulk editing of gallery selections.
//!
//! - [`aggregate`]: what the selected records have in common
//! - [`form`], [`multiset`], [`tristate`]: dialog-local form state
//! - [`diff`]: form state to sparse update payload
//! - [`dialog`]: submit/cancel lifecycle

pub mod aggregate;
pub mod dialog;
pub mod diff;
pub mod form;
pub mod multiset;
pub mod tristate;

pub use aggregate::{Aggregate, GalleryAggregate, aggregate};
pub use dialog::{CloseCallback, EditGalleriesDialog, SubmitOutcome, SubmitState};
pub use diff::build_update_input;
pub use form::{FieldEdit, FormEdit, GalleryForm};
pub use multiset::MultiSetField;
pub use tristate::TriState;
