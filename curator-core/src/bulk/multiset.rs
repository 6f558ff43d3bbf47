use curator_model::bulk::{BulkUpdateIdMode, BulkUpdateIds};

/// Editor state for a set-valued field (performers or tags).
///
/// `existing` is what the whole selection already shares, used only for
/// display; `ids` is what the user picked. A fresh editor has no picks and
/// is in [`BulkUpdateIdMode::Add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSetField<Id> {
    ids: Vec<Id>,
    existing: Vec<Id>,
    mode: BulkUpdateIdMode,
}

impl<Id> Default for MultiSetField<Id> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            existing: Vec::new(),
            mode: BulkUpdateIdMode::default(),
        }
    }
}

impl<Id: Clone + PartialEq> MultiSetField<Id> {
    pub fn new(existing: Vec<Id>) -> Self {
        Self {
            existing,
            ..Self::default()
        }
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn existing(&self) -> &[Id] {
        &self.existing
    }

    pub fn mode(&self) -> BulkUpdateIdMode {
        self.mode
    }

    /// List-changed callback: replaces the picked ids, dropping duplicates.
    pub fn set_ids(&mut self, ids: Vec<Id>) {
        let mut deduped: Vec<Id> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.ids = deduped;
    }

    /// Mode-changed callback.
    pub fn set_mode(&mut self, mode: BulkUpdateIdMode) {
        self.mode = mode;
    }

    /// Picks one more id. Returns false if it was already picked.
    pub fn add(&mut self, id: Id) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Un-picks an id. Returns false if it was not picked.
    pub fn remove(&mut self, id: &Id) -> bool {
        let before = self.ids.len();
        self.ids.retain(|candidate| candidate != id);
        before != self.ids.len()
    }

    /// Whether the user moved the list or the mode away from the initial
    /// state.
    pub fn is_modified(&self) -> bool {
        !self.ids.is_empty() || self.mode != BulkUpdateIdMode::default()
    }

    /// Picked ids every selected record already has.
    pub fn common_ids(&self) -> Vec<Id> {
        self.ids
            .iter()
            .filter(|id| self.existing.contains(id))
            .cloned()
            .collect()
    }

    /// Picked ids that are new to at least one selected record.
    pub fn added_ids(&self) -> Vec<Id> {
        self.ids
            .iter()
            .filter(|id| !self.existing.contains(id))
            .cloned()
            .collect()
    }

    /// The `{mode, ids}` pair to submit, or `None` when untouched.
    pub fn to_update(&self) -> Option<BulkUpdateIds<Id>> {
        self.is_modified()
            .then(|| BulkUpdateIds::new(self.mode, self.ids.clone()))
    }
}
