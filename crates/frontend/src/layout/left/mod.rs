pub mod sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая колонка; видимость управляется `left_open`
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.left_open.get()
        >
            {children()}
        </aside>
    }
}
