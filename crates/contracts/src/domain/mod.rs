pub mod a001_addon;
pub mod a002_addon_category;
pub mod a003_tour;
pub mod a004_pricing_rule;
pub mod common;
