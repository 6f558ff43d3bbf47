//! Convenience re-exports for downstream crates.

pub use crate::bulk::{BulkGalleryUpdateInput, BulkUpdateIdMode, BulkUpdateIds};
pub use crate::error::ModelError;
pub use crate::gallery::{PerformerRef, SelectedGallery, StudioRef, TagRef};
pub use crate::ids::{GalleryID, PerformerID, StudioID, TagID};
pub use crate::rating::Rating;
