use contracts::domain::a001_addon::aggregate::AddOnId;
use contracts::usecases::u501_calculate_addon_total::SelectedAddOn;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Quantity an add-on gets when it is selected without an explicit count
pub const DEFAULT_COUNT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("add-on {0} is not selected")]
    NotSelected(AddOnId),
    #[error("count must be a whole number of at least 1, got '{0}'")]
    InvalidCount(String),
}

/// Which add-ons the operator picked and how many of each.
///
/// Counts live only for selected ids: deselecting drops the stored count so a
/// later reselect starts again from [`DEFAULT_COUNT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: BTreeSet<AddOnId>,
    counts: BTreeMap<AddOnId, u32>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when membership actually changed
    pub fn set_selected(&mut self, id: AddOnId, selected: bool) -> bool {
        if selected {
            self.selected.insert(id)
        } else {
            self.counts.remove(&id);
            self.selected.remove(&id)
        }
    }

    pub fn toggle(&mut self, id: AddOnId) {
        let selected = self.is_selected(id);
        self.set_selected(id, !selected);
    }

    /// Set the quantity of a selected add-on. Counts below 1 are rejected and
    /// leave the stored count untouched.
    pub fn set_count(&mut self, id: AddOnId, count: i64) -> Result<(), SelectionError> {
        if !self.is_selected(id) {
            return Err(SelectionError::NotSelected(id));
        }
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| SelectionError::InvalidCount(count.to_string()))?;
        self.counts.insert(id, count);
        Ok(())
    }

    /// Same as [`set_count`](Self::set_count), from raw form input.
    /// Fractions, blanks and non-numbers are rejected.
    pub fn set_count_from_input(&mut self, id: AddOnId, raw: &str) -> Result<(), SelectionError> {
        let count = parse_count(raw)?;
        self.set_count(id, count)
    }

    pub fn is_selected(&self, id: AddOnId) -> bool {
        self.selected.contains(&id)
    }

    /// Quantity of a selected add-on, `None` when not selected
    pub fn count(&self, id: AddOnId) -> Option<u32> {
        self.is_selected(id)
            .then(|| self.counts.get(&id).copied().unwrap_or(DEFAULT_COUNT))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Deselect every add-on for which `keep` returns false, dropping its
    /// count. Returns how many were deselected.
    pub fn retain(&mut self, mut keep: impl FnMut(AddOnId) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|&id| keep(id));
        let selected = &self.selected;
        self.counts.retain(|id, _| selected.contains(id));
        before - self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.counts.clear();
    }

    /// Selected add-ons with their counts, ordered by id
    pub fn snapshot(&self) -> Vec<SelectedAddOn> {
        self.selected
            .iter()
            .map(|&id| SelectedAddOn {
                id,
                count: self.counts.get(&id).copied().unwrap_or(DEFAULT_COUNT),
            })
            .collect()
    }
}

fn parse_count(raw: &str) -> Result<i64, SelectionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SelectionError::InvalidCount(raw.trim().to_string()))
}
