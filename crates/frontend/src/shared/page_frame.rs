//! PageFrame: standard root wrapper for every page in the content area.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_addon--list"`
//!   - `data-page-category`: one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Page heading
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");
    debug_assert!(is_known_category(category), "unknown page category: {category}");

    view! {
        <div id=page_id class="page" data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
