//! Tab titles for every registered key.

/// Readable title for a tab key
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_addon" => "Add-ons",
        "a004_pricing_rule" => "Pricing Rules",
        "u501_calculate_addon_total" => "Add-on Calculator",
        _ => "Unknown page",
    }
}
