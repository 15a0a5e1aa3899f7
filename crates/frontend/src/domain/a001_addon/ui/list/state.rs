use contracts::domain::a001_addon::aggregate::{AddOn, AddOnId};
use contracts::domain::a002_addon_category::aggregate::{AddOnCategory, AddOnCategoryId};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct AddOnListState {
    pub addons: Vec<AddOn>,
    pub categories: Vec<AddOnCategory>,
    /// `None` shows every category
    pub category_filter: Option<AddOnCategoryId>,
    pub search: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Add-on currently open in the edit form
    pub editing: Option<AddOnId>,
    pub is_loaded: bool,
}

impl Default for AddOnListState {
    fn default() -> Self {
        Self {
            addons: Vec::new(),
            categories: Vec::new(),
            category_filter: None,
            search: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            editing: None,
            is_loaded: false,
        }
    }
}

impl AddOnListState {
    pub fn upsert(&mut self, addon: AddOn) {
        match self.addons.iter_mut().find(|a| a.id == addon.id) {
            Some(existing) => *existing = addon,
            None => self.addons.push(addon),
        }
    }

    pub fn remove(&mut self, id: AddOnId) {
        self.addons.retain(|a| a.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
    }

    pub fn category_name(&self, id: AddOnCategoryId) -> String {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }
}

pub fn create_state() -> RwSignal<AddOnListState> {
    RwSignal::new(AddOnListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon(id: i64, name: &str) -> AddOn {
        AddOn {
            id: AddOnId(id),
            name: name.into(),
            category_id: AddOnCategoryId(1),
            price: 1.0,
        }
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut s = AddOnListState::default();
        s.upsert(addon(1, "Tent"));
        s.upsert(addon(2, "Lamp"));
        s.upsert(addon(1, "Big tent"));
        assert_eq!(s.addons.len(), 2);
        assert_eq!(s.addons[0].name, "Big tent");
    }

    #[test]
    fn test_remove_closes_edit_form() {
        let mut s = AddOnListState::default();
        s.upsert(addon(1, "Tent"));
        s.editing = Some(AddOnId(1));
        s.remove(AddOnId(1));
        assert!(s.addons.is_empty());
        assert_eq!(s.editing, None);
    }

    #[test]
    fn test_category_name_falls_back_to_id() {
        let mut s = AddOnListState::default();
        s.categories.push(AddOnCategory {
            id: AddOnCategoryId(1),
            name: "Food".into(),
        });
        assert_eq!(s.category_name(AddOnCategoryId(1)), "Food");
        assert_eq!(s.category_name(AddOnCategoryId(4)), "#4");
    }
}
