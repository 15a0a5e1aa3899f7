//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    /// (tab key, label)
    pub items: Vec<(&'static str, &'static str)>,
}

pub fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            items: vec![
                ("a001_addon", tab_label_for_key("a001_addon")),
                ("a004_pricing_rule", tab_label_for_key("a004_pricing_rule")),
            ],
        },
        MenuGroup {
            id: "tools",
            label: "Tools",
            items: vec![(
                "u501_calculate_addon_total",
                tab_label_for_key("u501_calculate_addon_total"),
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let items = group.items;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| expanded_groups.update(|items| {
                                if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                    items.remove(pos);
                                } else {
                                    items.push(group_id);
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                "›"
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items.clone().into_iter().map(|(key, label)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(key)
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open_tab(key, label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
