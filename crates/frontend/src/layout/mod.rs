pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              top bar                     |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <div class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>"☰"</button>
                <span class="top-header__title">"Tour Admin"</span>
            </div>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
