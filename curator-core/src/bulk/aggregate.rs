//! Reconciles a multi-record selection into one value per editable field.
//!
//! Scalars fold left to right: the first record seeds the candidate and the
//! first disagreement turns it indeterminate for good. A later run of records
//! that agree with each other does not bring the value back.

use curator_contracts::gallery_like::GalleryLike;
use curator_model::ids::{PerformerID, StudioID, TagID};
use curator_model::rating::Rating;
use tracing::debug;

/// A field's value across the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Aggregate<T> {
    /// Every selected record carries this value.
    Shared(T),
    /// At least two records disagree, or nothing was selected.
    #[default]
    Indeterminate,
}

impl<T> Aggregate<T> {
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Aggregate::Indeterminate)
    }

    pub fn shared(&self) -> Option<&T> {
        match self {
            Aggregate::Shared(value) => Some(value),
            Aggregate::Indeterminate => None,
        }
    }

    pub fn into_shared(self) -> Option<T> {
        match self {
            Aggregate::Shared(value) => Some(value),
            Aggregate::Indeterminate => None,
        }
    }
}

impl<T> Aggregate<Option<T>> {
    /// The agreed value, treating "all records lack it" as blank too.
    pub fn value(&self) -> Option<&T> {
        self.shared().and_then(Option::as_ref)
    }
}

/// Running candidate for a single-valued field.
#[derive(Debug, Clone)]
enum ScalarFold<T> {
    Empty,
    Candidate(T),
    Invalidated,
}

impl<T: PartialEq> ScalarFold<T> {
    fn push(self, value: T) -> Self {
        match self {
            ScalarFold::Empty => ScalarFold::Candidate(value),
            ScalarFold::Candidate(current) if current == value => {
                ScalarFold::Candidate(current)
            }
            ScalarFold::Candidate(_) | ScalarFold::Invalidated => {
                ScalarFold::Invalidated
            }
        }
    }

    fn finish(self) -> Aggregate<T> {
        match self {
            ScalarFold::Candidate(value) => Aggregate::Shared(value),
            ScalarFold::Empty | ScalarFold::Invalidated => {
                Aggregate::Indeterminate
            }
        }
    }
}

/// Running candidate for an id list. A mismatch empties the list for good.
#[derive(Debug, Clone)]
struct SetFold<Id> {
    candidate: Option<Vec<Id>>,
    collapsed: bool,
}

impl<Id: Ord> SetFold<Id> {
    fn new() -> Self {
        Self {
            candidate: None,
            collapsed: false,
        }
    }

    fn push(mut self, mut ids: Vec<Id>) -> Self {
        if self.collapsed {
            return self;
        }
        ids.sort();
        match &self.candidate {
            None => self.candidate = Some(ids),
            Some(current) if *current == ids => {}
            Some(_) => {
                self.candidate = None;
                self.collapsed = true;
            }
        }
        self
    }

    fn finish(self) -> Vec<Id> {
        if self.collapsed {
            return Vec::new();
        }
        self.candidate.unwrap_or_default()
    }
}

/// Per-field outcome of aggregating a selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryAggregate {
    pub title: Aggregate<Option<String>>,
    pub rating: Aggregate<Option<Rating>>,
    pub studio_id: Aggregate<Option<StudioID>>,
    /// Sorted ids common to every record; empty when they differ.
    pub performer_ids: Vec<PerformerID>,
    /// Sorted ids common to every record; empty when they differ.
    pub tag_ids: Vec<TagID>,
    pub organized: Aggregate<bool>,
}

/// Aggregates the editable fields of `selection`, in selection order.
///
/// An empty selection yields every scalar indeterminate and empty id lists.
pub fn aggregate<G: GalleryLike>(selection: &[G]) -> GalleryAggregate {
    let mut title = ScalarFold::Empty;
    let mut rating = ScalarFold::Empty;
    let mut studio_id = ScalarFold::Empty;
    let mut organized = ScalarFold::Empty;
    let mut performers = SetFold::new();
    let mut tags = SetFold::new();

    // A missing title, rating or studio is folded as the value `None`, so a
    // selection where every record lacks it agrees on `Shared(None)`. The
    // form only writes fields the user touched, so this never reaches the
    // payload; it only lets the form show "blank" as agreed.
    for gallery in selection {
        title = title.push(gallery.title().map(str::to_owned));
        rating = rating.push(gallery.rating());
        studio_id = studio_id.push(gallery.studio_id().cloned());
        organized = organized.push(gallery.organized());
        performers = performers.push(gallery.performer_ids());
        tags = tags.push(gallery.tag_ids());
    }

    let result = GalleryAggregate {
        title: title.finish(),
        rating: rating.finish(),
        studio_id: studio_id.finish(),
        performer_ids: performers.finish(),
        tag_ids: tags.finish(),
        organized: organized.finish(),
    };

    debug!(
        selected = selection.len(),
        title_shared = !result.title.is_indeterminate(),
        rating_shared = !result.rating.is_indeterminate(),
        studio_shared = !result.studio_id.is_indeterminate(),
        common_performers = result.performer_ids.len(),
        common_tags = result.tag_ids.len(),
        "aggregated gallery selection"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fold_never_reconverges() {
        let fold = ["A", "B", "A", "A"]
            .into_iter()
            .fold(ScalarFold::Empty, ScalarFold::push);
        assert_eq!(fold.finish(), Aggregate::<&str>::Indeterminate);
    }

    #[test]
    fn scalar_fold_keeps_unanimous_value() {
        let fold = [3, 3, 3].into_iter().fold(ScalarFold::Empty, ScalarFold::push);
        assert_eq!(fold.finish(), Aggregate::Shared(3));
    }

    #[test]
    fn set_fold_sorts_before_comparing() {
        let fold = SetFold::new().push(vec![3, 1, 2]).push(vec![2, 3, 1]);
        assert_eq!(fold.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn set_fold_collapse_is_permanent() {
        let fold = SetFold::new()
            .push(vec![1])
            .push(vec![2])
            .push(vec![])
            .push(vec![]);
        assert!(fold.finish().is_empty());
    }

    #[test]
    fn empty_selection_is_indeterminate() {
        let result = aggregate::<curator_model::SelectedGallery>(&[]);
        assert_eq!(result, GalleryAggregate::default());
        assert!(result.organized.is_indeterminate());
    }
}
