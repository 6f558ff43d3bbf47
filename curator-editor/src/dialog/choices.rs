use std::collections::BTreeMap;
use std::fmt;

use curator_model::prelude::*;

/// An entity the user can pick, labelled by its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<Id> {
    pub id: Id,
    pub name: String,
}

impl<Id: fmt::Display> fmt::Display for Choice<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.trim().is_empty() {
            write!(f, "{}", self.id)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Studio picker entry; `id: None` clears the studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioChoice {
    pub id: Option<StudioID>,
    pub label: String,
}

impl fmt::Display for StudioChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Bulk mode picker entry with a translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeChoice {
    pub mode: BulkUpdateIdMode,
    pub label: String,
}

impl ModeChoice {
    /// One entry per mode, labelled through `label`.
    pub fn all(label: impl Fn(BulkUpdateIdMode) -> String) -> Vec<ModeChoice> {
        BulkUpdateIdMode::ALL
            .iter()
            .map(|&mode| ModeChoice {
                mode,
                label: label(mode),
            })
            .collect()
    }
}

impl fmt::Display for ModeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Studios, performers and tags referenced anywhere in the selection.
///
/// The editor has no catalog search, so these are the names it can show
/// for ids and offer in its pickers. Each list is sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogChoices {
    pub studios: Vec<Choice<StudioID>>,
    pub performers: Vec<Choice<PerformerID>>,
    pub tags: Vec<Choice<TagID>>,
}

impl DialogChoices {
    pub fn from_selection(selection: &[SelectedGallery]) -> Self {
        Self {
            studios: collect(
                selection
                    .iter()
                    .filter_map(|g| g.studio.as_ref())
                    .map(|s| (&s.id, s.name.as_str())),
            ),
            performers: collect(
                selection
                    .iter()
                    .flat_map(|g| g.performers.iter())
                    .map(|p| (&p.id, p.name.as_str())),
            ),
            tags: collect(
                selection
                    .iter()
                    .flat_map(|g| g.tags.iter())
                    .map(|t| (&t.id, t.name.as_str())),
            ),
        }
    }

    pub fn studio_name<'a>(&'a self, id: &'a StudioID) -> &'a str {
        name_of(&self.studios, id)
    }

    pub fn performer_name<'a>(&'a self, id: &'a PerformerID) -> &'a str {
        name_of(&self.performers, id)
    }

    pub fn tag_name<'a>(&'a self, id: &'a TagID) -> &'a str {
        name_of(&self.tags, id)
    }

    /// Studio picker entries, led by the "no studio" entry.
    pub fn studio_options(&self, none_label: &str) -> Vec<StudioChoice> {
        std::iter::once(StudioChoice {
            id: None,
            label: none_label.to_string(),
        })
        .chain(self.studios.iter().map(|choice| StudioChoice {
            id: Some(choice.id.clone()),
            label: choice.to_string(),
        }))
        .collect()
    }

    /// Picker entry for a studio id, falling back to the raw id.
    pub fn studio_option(
        &self,
        id: Option<&StudioID>,
        none_label: &str,
    ) -> StudioChoice {
        match id {
            Some(id) => StudioChoice {
                id: Some(id.clone()),
                label: self.studio_name(id).to_string(),
            },
            None => StudioChoice {
                id: None,
                label: none_label.to_string(),
            },
        }
    }

    /// Learns a name for an id typed in by hand so later lookups resolve.
    pub fn remember_performer(&mut self, id: PerformerID) {
        remember(&mut self.performers, id);
    }

    pub fn remember_tag(&mut self, id: TagID) {
        remember(&mut self.tags, id);
    }

    pub fn remember_studio(&mut self, id: StudioID) {
        remember(&mut self.studios, id);
    }
}

fn collect<'a, Id: Ord + Clone + 'a>(
    refs: impl Iterator<Item = (&'a Id, &'a str)>,
) -> Vec<Choice<Id>> {
    let mut by_id: BTreeMap<Id, String> = BTreeMap::new();
    for (id, name) in refs {
        let entry = by_id.entry(id.clone()).or_default();
        if entry.is_empty() {
            *entry = name.to_string();
        }
    }

    let mut choices: Vec<Choice<Id>> = by_id
        .into_iter()
        .map(|(id, name)| Choice { id, name })
        .collect();
    choices.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    choices
}

fn name_of<'a, Id: PartialEq + AsRef<str>>(
    choices: &'a [Choice<Id>],
    id: &'a Id,
) -> &'a str {
    choices
        .iter()
        .find(|choice| &choice.id == id && !choice.name.trim().is_empty())
        .map(|choice| choice.name.as_str())
        .unwrap_or_else(|| id.as_ref())
}

fn remember<Id: PartialEq + AsRef<str>>(choices: &mut Vec<Choice<Id>>, id: Id) {
    if choices.iter().any(|choice| choice.id == id) {
        return;
    }
    let name = id.as_ref().to_string();
    choices.push(Choice { id, name });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: &str) -> PerformerID {
        PerformerID::new(raw).unwrap()
    }

    #[test]
    fn choices_are_deduplicated_and_sorted_by_name() {
        let selection = vec![
            SelectedGallery::new(GalleryID::new("1").unwrap())
                .with_performer(pid("p2"), "bea")
                .with_performer(pid("p1"), "Ann"),
            SelectedGallery::new(GalleryID::new("2").unwrap())
                .with_performer(pid("p1"), "Ann"),
        ];
        let choices = DialogChoices::from_selection(&selection);
        let names: Vec<String> =
            choices.performers.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Ann", "bea"]);
        assert!(choices.studios.is_empty());
    }

    #[test]
    fn unknown_ids_display_as_themselves() {
        let mut choices = DialogChoices::default();
        let id = pid("p77");
        assert_eq!(choices.performer_name(&id), "p77");
        choices.remember_performer(id.clone());
        choices.remember_performer(id.clone());
        assert_eq!(choices.performers.len(), 1);
    }

    #[test]
    fn studio_options_lead_with_clear() {
        let selection = vec![
            SelectedGallery::new(GalleryID::new("1").unwrap())
                .with_studio(StudioID::new("s1").unwrap(), "North"),
        ];
        let options =
            DialogChoices::from_selection(&selection).studio_options("None");
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, None);
        assert_eq!(options[1].label, "North");
    }

    #[test]
    fn remembered_studios_become_options() {
        let mut choices = DialogChoices::default();
        let id = StudioID::new("s9").unwrap();
        choices.remember_studio(id.clone());
        let options = choices.studio_options("None");
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].id, Some(id));
        assert_eq!(options[1].label, "s9");
    }
}
