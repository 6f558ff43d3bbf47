//! Core data model definitions shared across Curator crates.
#![allow(missing_docs)]

pub mod bulk;
pub mod error;
pub mod gallery;
pub mod ids;
pub mod prelude;
pub mod rating;

pub use bulk::{BulkGalleryUpdateInput, BulkUpdateIdMode, BulkUpdateIds};
pub use error::{ModelError, Result as ModelResult};
pub use gallery::{PerformerRef, SelectedGallery, StudioRef, TagRef};
pub use ids::{GalleryID, PerformerID, StudioID, TagID};
pub use rating::Rating;
