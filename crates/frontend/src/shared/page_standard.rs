//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_addon--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_addon/` directory.

/// List of records with inline editing.
pub const PAGE_CAT_LIST: &str = "list";

/// Use-case page (calculators and other actions).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_USECASE];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_addon--list"));
        assert!(!is_valid_page_id("a001_addon"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("dashboard"));
    }
}
