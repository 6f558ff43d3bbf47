use curator_model::gallery::SelectedGallery;
use curator_model::ids::{GalleryID, PerformerID, StudioID, TagID};
use curator_model::rating::Rating;

/// Read access to the editable fields of a gallery record.
///
/// Lets the bulk editor aggregate over whatever record type the list view
/// hands it, whether that is a slim listing snapshot or a full detail model.
pub trait GalleryLike {
    /// Identifier of the record
    fn gallery_id(&self) -> &GalleryID;

    fn title(&self) -> Option<&str>;

    fn rating(&self) -> Option<Rating>;

    fn studio_id(&self) -> Option<&StudioID>;

    /// Associated performer ids, in whatever order the record stores them
    fn performer_ids(&self) -> Vec<PerformerID>;

    /// Associated tag ids, in whatever order the record stores them
    fn tag_ids(&self) -> Vec<TagID>;

    fn organized(&self) -> bool;
}

impl GalleryLike for SelectedGallery {
    fn gallery_id(&self) -> &GalleryID {
        &self.id
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn rating(&self) -> Option<Rating> {
        self.rating
    }

    fn studio_id(&self) -> Option<&StudioID> {
        self.studio.as_ref().map(|studio| &studio.id)
    }

    fn performer_ids(&self) -> Vec<PerformerID> {
        self.performers.iter().map(|p| p.id.clone()).collect()
    }

    fn tag_ids(&self) -> Vec<TagID> {
        self.tags.iter().map(|t| t.id.clone()).collect()
    }

    fn organized(&self) -> bool {
        self.organized
    }
}

impl<T: GalleryLike + ?Sized> GalleryLike for &T {
    fn gallery_id(&self) -> &GalleryID {
        (**self).gallery_id()
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn rating(&self) -> Option<Rating> {
        (**self).rating()
    }

    fn studio_id(&self) -> Option<&StudioID> {
        (**self).studio_id()
    }

    fn performer_ids(&self) -> Vec<PerformerID> {
        (**self).performer_ids()
    }

    fn tag_ids(&self) -> Vec<TagID> {
        (**self).tag_ids()
    }

    fn organized(&self) -> bool {
        (**self).organized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_gallery_exposes_association_ids() {
        let gallery = SelectedGallery::new(GalleryID::new("7").unwrap())
            .with_studio(StudioID::new("s1").unwrap(), "Studio One")
            .with_performer(PerformerID::new("p2").unwrap(), "Bea")
            .with_performer(PerformerID::new("p1").unwrap(), "Ann")
            .with_tag(TagID::new("t1").unwrap(), "outdoor");

        assert_eq!(gallery.studio_id().map(StudioID::as_str), Some("s1"));
        assert_eq!(
            gallery.performer_ids(),
            vec![PerformerID::new("p2").unwrap(), PerformerID::new("p1").unwrap()]
        );
        assert_eq!(gallery.tag_ids().len(), 1);
        assert!(!gallery.organized());
    }
}
