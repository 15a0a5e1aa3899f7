use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </div>
    }
}
