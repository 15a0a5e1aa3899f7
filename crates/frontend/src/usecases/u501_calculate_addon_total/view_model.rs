use super::calculator::HttpTotalCalculator;
use super::flow::{schedule_recompute, CalculatorState};
use crate::domain::a001_addon::api as addon_api;
use crate::domain::a002_addon_category::api as category_api;
use contracts::domain::a001_addon::aggregate::{group_by_category, AddOn, AddOnId};
use contracts::domain::a002_addon_category::aggregate::{AddOnCategory, AddOnCategoryId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

/// Category heading with the add-ons listed under it
pub type CategoryGroup = (AddOnCategory, Vec<AddOn>);

/// Groups to render; `filter` narrows the screen to one category
pub fn visible_groups(
    categories: &[AddOnCategory],
    addons: &[AddOn],
    filter: Option<AddOnCategoryId>,
) -> Vec<CategoryGroup> {
    group_by_category(categories, addons, |c| c.id)
        .into_iter()
        .filter(|(category, _)| filter.map_or(true, |f| category.id == f))
        .map(|(category, items)| (category.clone(), items.into_iter().cloned().collect()))
        .collect()
}

/// Signals behind the add-on calculator screen
#[derive(Clone, Copy)]
pub struct AddOnCalculatorVm {
    pub state: RwSignal<CalculatorState>,
    pub addons: RwSignal<Vec<AddOn>>,
    pub categories: RwSignal<Vec<AddOnCategory>>,
    /// Category id as typed in the filter select; empty for all
    pub category_filter: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Rejected count inputs, keyed by add-on
    pub input_errors: RwSignal<BTreeMap<AddOnId, String>>,
}

impl AddOnCalculatorVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CalculatorState::new()),
            addons: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            category_filter: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            input_errors: RwSignal::new(BTreeMap::new()),
        }
    }

    /// Fetch categories and add-ons. Prices shown on screen come from here;
    /// the total always comes from the calculation endpoint.
    pub fn load_catalog(&self) {
        let this = *self;
        spawn_local(async move {
            this.loading.set(true);
            this.error.set(None);

            match category_api::fetch_all().await {
                Ok(categories) => this.categories.set(categories),
                Err(e) => {
                    log::error!("add-on categories load failed: {}", e);
                    this.error.set(Some(format!("Failed to load categories: {}", e)));
                }
            }
            match addon_api::fetch_all().await {
                Ok(addons) => {
                    let pruned = this
                        .state
                        .try_update(|s| s.prune_to_catalog(&addons))
                        .unwrap_or(false);
                    this.addons.set(addons);
                    if pruned {
                        log::info!("deselected add-ons no longer in the catalog");
                        this.recompute();
                    }
                }
                Err(e) => {
                    log::error!("add-ons load failed: {}", e);
                    this.error.set(Some(format!("Failed to load add-ons: {}", e)));
                }
            }

            this.loading.set(false);
        });
    }

    pub fn toggle(&self, id: AddOnId) {
        self.state.update(|s| s.toggle(id));
        self.input_errors.update(|errors| {
            errors.remove(&id);
        });
        self.recompute();
    }

    /// Apply a typed count. Rejected input is reported next to the field and
    /// the stored count stays as it was.
    pub fn set_count(&self, id: AddOnId, raw: &str) {
        let result = self
            .state
            .try_update(|s| s.set_count_from_input(id, raw));
        match result {
            Some(Ok(changed)) => {
                self.input_errors.update(|errors| {
                    errors.remove(&id);
                });
                if changed {
                    self.recompute();
                }
            }
            Some(Err(e)) => {
                log::debug!("count for add-on {} rejected: {}", id, e);
                self.input_errors.update(|errors| {
                    errors.insert(id, e.to_string());
                });
            }
            None => {}
        }
    }

    fn recompute(&self) {
        let future = schedule_recompute(HttpTotalCalculator::from_config(), self.state);
        spawn_local(async move {
            future.await;
        });
    }

    pub fn is_selected(&self, id: AddOnId) -> bool {
        self.state.with(|s| s.selection.is_selected(id))
    }

    pub fn count(&self, id: AddOnId) -> Option<u32> {
        self.state.with(|s| s.selection.count(id))
    }

    pub fn input_error(&self, id: AddOnId) -> Option<String> {
        self.input_errors.with(|errors| errors.get(&id).cloned())
    }

    pub fn total(&self) -> f64 {
        self.state.with(|s| s.tracker.total())
    }

    pub fn is_computing(&self) -> bool {
        self.state.with(|s| s.tracker.is_computing())
    }

    pub fn last_error(&self) -> Option<String> {
        self.state
            .with(|s| s.tracker.last_error().map(ToString::to_string))
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        let filter = AddOnCategoryId::from_string(&self.category_filter.get()).ok();
        self.categories.with(|categories| {
            self.addons
                .with(|addons| visible_groups(categories, addons, filter))
        })
    }
}

impl Default for AddOnCalculatorVm {
    fn default() -> Self {
        Self::new()
    }
}
