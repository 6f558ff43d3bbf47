//! Collaborators the bulk editor talks to. All of them are injected so tests
//! and alternative front ends can swap them out.

use async_trait::async_trait;
use curator_model::bulk::BulkGalleryUpdateInput;
use curator_model::ids::GalleryID;

use crate::error::{CuratorError, Result};

/// Applies a bulk update to the catalog.
#[async_trait]
pub trait GalleryUpdater: Send + Sync {
    /// Sends one aggregate update; returns the ids of the galleries written.
    async fn bulk_gallery_update(
        &self,
        input: BulkGalleryUpdateInput,
    ) -> Result<Vec<GalleryID>>;
}

/// Toast-style user notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, error: &CuratorError);
}

/// Internationalized string lookup.
pub trait Translator: Send + Sync {
    /// Formats message `id` with named arguments.
    fn message(&self, id: &str, args: &[(&str, &str)]) -> String;

    /// Formats message `id` without arguments.
    fn text(&self, id: &str) -> String {
        self.message(id, &[])
    }
}

#[async_trait]
impl<T: GalleryUpdater + ?Sized> GalleryUpdater for std::sync::Arc<T> {
    async fn bulk_gallery_update(
        &self,
        input: BulkGalleryUpdateInput,
    ) -> Result<Vec<GalleryID>> {
        (**self).bulk_gallery_update(input).await
    }
}
