//! Trait surfaces that describe interactions with Curator data models.

pub mod gallery_like;

/// Frequently used traits for UI and orchestration crates.
pub mod prelude {
    pub use super::gallery_like::GalleryLike;
}
