pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                   |
/// +------------------------------------------+
/// |  Sidebar  |           Tabs               |
/// |  (Left)   |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <left::Left>
                    <left::sidebar::Sidebar />
                </left::Left>
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>"☰"</button>
            <span class="top-header__title">"InternHub"</span>
        </header>
    }
}
