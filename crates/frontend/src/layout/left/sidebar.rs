use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::storage::{clear_tokens, get_access_token, save_access_token};
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    /// (key, icon)
    items: &'static [(&'static str, &'static str)],
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Employees",
        items: &[
            ("a001_employee_closure", "user-minus"),
            ("a004_talent_track", "trending-up"),
        ],
    },
    MenuGroup {
        label: "Interns",
        items: &[
            ("a002_intern_termination", "x-circle"),
            ("a003_intern_completion", "graduation-cap"),
            ("a005_early_completion", "inbox"),
        ],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {MENU
                .iter()
                .map(|group| {
                    view! {
                        <div class="app-sidebar__group">
                            <div class="app-sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .iter()
                                .map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            <TokenInput />
        </div>
    }
}

/// Поле для Bearer-токена, выданного `backend --issue-token <user>`
#[component]
fn TokenInput() -> impl IntoView {
    let has_token = RwSignal::new(get_access_token().is_some());
    let draft = RwSignal::new(String::new());

    let save = move |_| {
        let token = draft.get_untracked();
        if token.trim().is_empty() {
            return;
        }
        save_access_token(token.trim());
        draft.set(String::new());
        has_token.set(true);
    };
    let forget = move |_| {
        clear_tokens();
        has_token.set(false);
    };

    view! {
        <div class="app-sidebar__token">
            <div class="app-sidebar__item-content">
                {icon("lock")}
                <span>{move || if has_token.get() { "Token saved" } else { "No token" }}</span>
            </div>
            <input
                type="password"
                class="input"
                placeholder="Paste access token"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <div class="app-sidebar__token-actions">
                <button class="button button--primary" on:click=save>"Save"</button>
                <button
                    class="button button--secondary"
                    disabled=move || !has_token.get()
                    on:click=forget
                >
                    "Forget"
                </button>
            </div>
        </div>
    }
}
