use crate::ids::{GalleryID, PerformerID, StudioID, TagID};
use crate::rating::Rating;

/// Studio reference as it appears on a gallery listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudioRef {
    pub id: StudioID,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// Performer reference as it appears on a gallery listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformerRef {
    pub id: PerformerID,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// Tag reference as it appears on a gallery listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRef {
    pub id: TagID,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

/// Read-only snapshot of a gallery picked in a list view.
///
/// The bulk editor never mutates these; it only reads them to work out which
/// values the selection has in common.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedGallery {
    pub id: GalleryID,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<Rating>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub studio: Option<StudioRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub performers: Vec<PerformerRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<TagRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub organized: bool,
}

impl SelectedGallery {
    /// Bare snapshot with no title, rating, studio or associations.
    pub fn new(id: GalleryID) -> Self {
        Self {
            id,
            title: None,
            rating: None,
            studio: None,
            performers: Vec::new(),
            tags: Vec::new(),
            organized: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_rating(mut self, rating: impl Into<Rating>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_studio(mut self, id: StudioID, name: impl Into<String>) -> Self {
        self.studio = Some(StudioRef {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_performer(
        mut self,
        id: PerformerID,
        name: impl Into<String>,
    ) -> Self {
        self.performers.push(PerformerRef {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_tag(mut self, id: TagID, name: impl Into<String>) -> Self {
        self.tags.push(TagRef {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_organized(mut self, organized: bool) -> Self {
        self.organized = organized;
        self
    }
}
