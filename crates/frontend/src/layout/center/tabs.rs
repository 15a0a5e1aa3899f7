use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

/// Header strip with one button per open tab
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__strip">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <Tab tab=tab /> }
            />
        </div>
    }
}

#[component]
fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key.get_value().as_str()));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate_tab(&key.get_value())>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// Pages of all open tabs; inactive ones stay mounted but hidden
#[component]
pub fn TabPages() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__pages">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabPage tab=tab tabs_store=ctx /> }
            />
            <Show when=move || ctx.opened.with(|tabs| tabs.is_empty())>
                <p class="tabs__empty">"Pick a page from the menu"</p>
            </Show>
        </div>
    }
}
