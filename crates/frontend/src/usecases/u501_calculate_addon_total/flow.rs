//! Recompute trigger: every selection edit issues a fresh request token, and
//! only the response for the latest token reaches the displayed total.

use super::calculator::TotalCalculator;
use super::selection::{SelectionError, SelectionStore};
use super::tracker::{RequestToken, Resolution, TotalTracker};
use contracts::domain::a001_addon::aggregate::{AddOn, AddOnId};
use contracts::usecases::u501_calculate_addon_total::SelectedAddOn;
use leptos::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Everything the add-on calculator screen owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub selection: SelectionStore,
    pub tracker: TotalTracker,
}

/// First half of a recompute, taken synchronously at the moment of the edit
#[derive(Debug, Clone, PartialEq)]
pub enum Pending {
    /// Nothing selected: total already set to zero
    Settled(RequestToken),
    /// Request to send for this snapshot
    Request(RequestToken, Vec<SelectedAddOn>),
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: AddOnId) {
        self.selection.toggle(id);
    }

    /// Returns whether the stored count changed
    pub fn set_count_from_input(&mut self, id: AddOnId, raw: &str) -> Result<bool, SelectionError> {
        let before = self.selection.count(id);
        self.selection.set_count_from_input(id, raw)?;
        Ok(self.selection.count(id) != before)
    }

    /// Deselect add-ons missing from a freshly loaded catalog so they are
    /// not sent for pricing. Returns true when anything was deselected.
    pub fn prune_to_catalog(&mut self, catalog: &[AddOn]) -> bool {
        let pruned = self
            .selection
            .retain(|id| catalog.iter().any(|a| a.id == id));
        pruned > 0
    }

    pub fn begin_recompute(&mut self) -> Pending {
        if self.selection.is_empty() {
            Pending::Settled(self.tracker.reset_to_zero())
        } else {
            let snapshot = self.selection.snapshot();
            Pending::Request(self.tracker.begin(), snapshot)
        }
    }
}

/// Shared access to [`CalculatorState`] from the recompute future.
///
/// Returns `None` when the state is gone (the screen was unmounted).
pub trait StateHandle: Clone + 'static {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut CalculatorState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<CalculatorState> {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut CalculatorState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateHandle for Rc<RefCell<CalculatorState>> {
    fn with_state_mut<R>(&self, f: impl FnOnce(&mut CalculatorState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fire a recompute for the current selection.
///
/// The snapshot and token are taken right away; the returned future performs
/// the request and records the outcome. Errors end here: they are logged and
/// the previous total stays on screen.
pub fn schedule_recompute<C, H>(calculator: C, handle: H) -> impl Future<Output = Option<Resolution>>
where
    C: TotalCalculator + 'static,
    H: StateHandle,
{
    let pending = handle.with_state_mut(CalculatorState::begin_recompute);

    async move {
        let (token, snapshot) = match pending? {
            Pending::Settled(token) => {
                log::debug!("add-on total #{}: empty selection, total is 0", token.value());
                return Some(Resolution::Applied(0.0));
            }
            Pending::Request(token, snapshot) => (token, snapshot),
        };

        let outcome = calculator.calculate(&snapshot).await;
        let resolution = handle.with_state_mut(|s| s.tracker.resolve(token, outcome))?;

        match &resolution {
            Resolution::Applied(total) => {
                log::debug!("add-on total #{}: {} item(s) -> {}", token.value(), snapshot.len(), total)
            }
            Resolution::Failed(e) => log::warn!("add-on total #{} not updated: {}", token.value(), e),
            Resolution::Stale => log::debug!("add-on total #{}: superseded, response dropped", token.value()),
        }
        Some(resolution)
    }
}
