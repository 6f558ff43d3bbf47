use crate::ids::{GalleryID, PerformerID, StudioID, TagID};
use crate::rating::Rating;

/// How a set of ids is written across every record in a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum BulkUpdateIdMode {
    /// Replace each record's associations with exactly the given ids.
    Set,
    /// Union the given ids into each record's associations.
    #[default]
    Add,
    /// Drop the given ids from each record's associations.
    Remove,
}

impl BulkUpdateIdMode {
    pub const ALL: [BulkUpdateIdMode; 3] = [
        BulkUpdateIdMode::Add,
        BulkUpdateIdMode::Remove,
        BulkUpdateIdMode::Set,
    ];

    /// Message catalog key for the mode's label.
    pub fn label_key(&self) -> &'static str {
        match self {
            BulkUpdateIdMode::Set => "actions.overwrite",
            BulkUpdateIdMode::Add => "actions.add",
            BulkUpdateIdMode::Remove => "actions.remove",
        }
    }
}

impl std::fmt::Display for BulkUpdateIdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkUpdateIdMode::Set => write!(f, "SET"),
            BulkUpdateIdMode::Add => write!(f, "ADD"),
            BulkUpdateIdMode::Remove => write!(f, "REMOVE"),
        }
    }
}

/// An id list together with the mode it should be applied with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulkUpdateIds<Id> {
    pub mode: BulkUpdateIdMode,
    pub ids: Vec<Id>,
}

impl<Id> BulkUpdateIds<Id> {
    pub fn new(mode: BulkUpdateIdMode, ids: Vec<Id>) -> Self {
        Self { mode, ids }
    }
}

/// Payload of the bulk gallery mutation.
///
/// Every field except `ids` is sparse: `None` leaves the field untouched on
/// every record. `rating` and `studio_id` nest a second `Option` so that
/// `Some(None)` clears the value, which serializes as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulkGalleryUpdateInput {
    pub ids: Vec<GalleryID>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "explicit_null::deserialize"
        )
    )]
    pub rating: Option<Option<Rating>>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "explicit_null::deserialize"
        )
    )]
    pub studio_id: Option<Option<StudioID>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub performer_ids: Option<BulkUpdateIds<PerformerID>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tag_ids: Option<BulkUpdateIds<TagID>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub organized: Option<bool>,
}

impl BulkGalleryUpdateInput {
    pub fn new(ids: Vec<GalleryID>) -> Self {
        Self {
            ids,
            ..Default::default()
        }
    }

    /// True when the payload would not change any field.
    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.rating.is_none()
            && self.studio_id.is_none()
            && self.performer_ids.is_none()
            && self.tag_ids.is_none()
            && self.organized.is_none()
    }
}

/// Keeps `null` distinct from a missing key when reading a payload back.
#[cfg(feature = "serde")]
mod explicit_null {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(
        deserializer: D,
    ) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use serde_json::json;

    fn gallery(raw: &str) -> GalleryID {
        GalleryID::new(raw).unwrap()
    }

    #[test]
    fn sparse_fields_are_omitted_and_clears_are_null() {
        let mut input = BulkGalleryUpdateInput::new(vec![gallery("1")]);
        input.rating = Some(None);
        input.tag_ids = Some(BulkUpdateIds::new(
            BulkUpdateIdMode::Add,
            vec![TagID::new("X").unwrap()],
        ));

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "ids": ["1"],
                "rating": null,
                "tag_ids": { "mode": "ADD", "ids": ["X"] }
            })
        );
    }

    #[test]
    fn explicit_null_survives_deserialization() {
        let input: BulkGalleryUpdateInput = serde_json::from_value(json!({
            "ids": ["1", "2"],
            "studio_id": null
        }))
        .unwrap();
        assert_eq!(input.studio_id, Some(None));
        assert_eq!(input.rating, None);
        assert!(!input.is_noop());
    }
}
