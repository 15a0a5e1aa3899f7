//! Tab registry: maps `tab.key` to the page it shows

use crate::domain::a001_addon::ui::list::AddOnList;
use crate::domain::a004_pricing_rule::ui::list::PricingRuleList;
use crate::usecases::u501_calculate_addon_total::AddOnCalculatorPage;
use leptos::prelude::*;

pub const TAB_KEYS: &[&str] = &["a001_addon", "a004_pricing_rule", "u501_calculate_addon_total"];

pub fn is_known_tab(key: &str) -> bool {
    TAB_KEYS.contains(&key)
}

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Catalog
        // ═══════════════════════════════════════════════════════════════════
        "a001_addon" => view! { <AddOnList /> }.into_any(),
        "a004_pricing_rule" => view! { <PricingRuleList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Use cases
        // ═══════════════════════════════════════════════════════════════════
        "u501_calculate_addon_total" => view! { <AddOnCalculatorPage /> }.into_any(),

        unknown => {
            log::warn!("no page registered for tab '{}'", unknown);
            view! { <div class="tabs__unknown">{format!("Unknown page: {}", unknown)}</div> }
                .into_any()
        }
    }
}
