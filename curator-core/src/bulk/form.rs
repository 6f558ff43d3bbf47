use curator_model::bulk::BulkUpdateIdMode;
use curator_model::ids::{PerformerID, StudioID, TagID};
use curator_model::rating::Rating;

use super::aggregate::GalleryAggregate;
use super::multiset::MultiSetField;
use super::tristate::TriState;

/// Tracks whether the user has touched a single-valued field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldEdit<T> {
    #[default]
    Untouched,
    Edited(T),
}

impl<T> FieldEdit<T> {
    pub fn is_edited(&self) -> bool {
        matches!(self, FieldEdit::Edited(_))
    }

    pub fn edited(&self) -> Option<&T> {
        match self {
            FieldEdit::Edited(value) => Some(value),
            FieldEdit::Untouched => None,
        }
    }
}

impl<T: Clone> FieldEdit<T> {
    /// The value to display: the user's edit if any, else `fallback`.
    pub fn resolve(&self, fallback: T) -> T {
        match self {
            FieldEdit::Edited(value) => value.clone(),
            FieldEdit::Untouched => fallback,
        }
    }
}

/// Dialog-local form state, seeded from a [`GalleryAggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryForm {
    pub title: FieldEdit<String>,
    pub rating: FieldEdit<Option<Rating>>,
    pub studio_id: FieldEdit<Option<StudioID>>,
    pub performers: MultiSetField<PerformerID>,
    pub tags: MultiSetField<TagID>,
    pub organized: TriState,
    pub organized_touched: bool,
}

impl GalleryForm {
    /// Fresh, untouched form for the given aggregate.
    pub fn from_aggregate(aggregate: &GalleryAggregate) -> Self {
        Self {
            title: FieldEdit::Untouched,
            rating: FieldEdit::Untouched,
            studio_id: FieldEdit::Untouched,
            performers: MultiSetField::new(aggregate.performer_ids.clone()),
            tags: MultiSetField::new(aggregate.tag_ids.clone()),
            organized: aggregate.organized.shared().copied().into(),
            organized_touched: false,
        }
    }

    /// Title shown in the text input.
    pub fn display_title(&self, aggregate: &GalleryAggregate) -> String {
        self.title
            .resolve(aggregate.title.value().cloned().unwrap_or_default())
    }

    /// Rating shown by the star widget.
    pub fn display_rating(&self, aggregate: &GalleryAggregate) -> Option<Rating> {
        self.rating.resolve(aggregate.rating.value().copied())
    }

    /// Studio shown by the studio picker.
    pub fn display_studio(
        &self,
        aggregate: &GalleryAggregate,
    ) -> Option<StudioID> {
        self.studio_id
            .resolve(aggregate.studio_id.value().cloned())
    }

    pub fn is_pristine(&self) -> bool {
        !self.title.is_edited()
            && !self.rating.is_edited()
            && !self.studio_id.is_edited()
            && !self.performers.is_modified()
            && !self.tags.is_modified()
            && !self.organized_touched
    }

    /// Applies one input event.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Title(title) => self.title = FieldEdit::Edited(title),
            FormEdit::Rating(rating) => self.rating = FieldEdit::Edited(rating),
            FormEdit::Studio(studio) => {
                self.studio_id = FieldEdit::Edited(studio)
            }
            FormEdit::PerformerIds(ids) => self.performers.set_ids(ids),
            FormEdit::PerformerMode(mode) => self.performers.set_mode(mode),
            FormEdit::TagIds(ids) => self.tags.set_ids(ids),
            FormEdit::TagMode(mode) => self.tags.set_mode(mode),
            FormEdit::CycleOrganized => {
                self.organized = self.organized.cycle();
                self.organized_touched = true;
            }
        }
    }
}

/// Input events the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Title(String),
    /// `None` clears the rating on every record
    Rating(Option<Rating>),
    /// `None` clears the studio on every record
    Studio(Option<StudioID>),
    PerformerIds(Vec<PerformerID>),
    PerformerMode(BulkUpdateIdMode),
    TagIds(Vec<TagID>),
    TagMode(BulkUpdateIdMode),
    CycleOrganized,
}

impl FormEdit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "Form::Title",
            Self::Rating(_) => "Form::Rating",
            Self::Studio(_) => "Form::Studio",
            Self::PerformerIds(_) => "Form::PerformerIds",
            Self::PerformerMode(_) => "Form::PerformerMode",
            Self::TagIds(_) => "Form::TagIds",
            Self::TagMode(_) => "Form::TagMode",
            Self::CycleOrganized => "Form::CycleOrganized",
        }
    }
}
