//! Общая доска для всех видов жизненного цикла: поиск, фильтры по стадии
//! и причине, сортировка, список записей с прогрессом и панель записи с действиями.

use contracts::shared::lifecycle::{
    ActionResolver, AuditNote, ChecklistProgress, CodedVariant, LifecycleAction,
    LifecycleDefinition, LifecycleRecord, StatusCatalog,
};
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen_futures::spawn_local;

use super::session::LifecycleSession;
use super::store::{BoardQuery, SortKey};
use super::transport::HttpLifecycleTransport;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::system::auth::storage::StoredToken;

type HttpSession<D> = LifecycleSession<D, HttpLifecycleTransport<D, StoredToken>>;

/// Отрисовка полей конкретного вида
pub struct BoardConfig<D: LifecycleDefinition> {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Бейджи в строке списка
    pub badges: fn(&LifecycleRecord<D>) -> AnyView,
    /// Блок атрибутов в панели записи
    pub details: fn(&LifecycleRecord<D>) -> AnyView,
}

#[derive(Debug, Clone, PartialEq)]
enum Banner {
    Error(String),
    Success(String),
}

pub fn lifecycle_board<D: LifecycleDefinition>(config: BoardConfig<D>) -> impl IntoView {
    let BoardConfig {
        title,
        subtitle,
        badges,
        details,
    } = config;

    let session: StoredValue<HttpSession<D>, LocalStorage> =
        StoredValue::new_local(LifecycleSession::new(HttpLifecycleTransport::new(StoredToken)));
    // Увеличивается после каждого изменения хранилища
    let revision = RwSignal::new(0u64);
    let query = RwSignal::new(BoardQuery::<D>::default());
    let selected = RwSignal::new(None::<String>);
    let note = RwSignal::new(String::new());
    let banner = RwSignal::new(None::<Banner>);
    let loading = RwSignal::new(false);
    // Записи, по которым кнопки заблокированы до ответа сервера
    let pending = RwSignal::new(HashSet::<String>::new());

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            let session = session.get_value();
            match session.refresh().await {
                Ok(_) => banner.set(None),
                Err(e) => {
                    log::error!("{}: refresh failed: {}", D::full_name(), e);
                    banner.set(Some(Banner::Error(e.user_message())));
                }
            }
            revision.update(|r| *r += 1);
            loading.set(false);
        });
    };

    let fill = move || {
        spawn_local(async move {
            let session = session.get_value();
            match session.transport().fill_test_data().await {
                Ok(0) => {}
                Ok(n) => banner.set(Some(Banner::Success(format!("{} demo records added", n)))),
                Err(e) => banner.set(Some(Banner::Error(e.user_message()))),
            }
            fetch();
        });
    };

    let run_action = move |id: String, action: LifecycleAction| {
        let text = note.get_untracked();
        pending.update(|p| {
            p.insert(id.clone());
        });
        spawn_local(async move {
            let session = session.get_value();
            let result = session.trigger(&id, action.id, Some(text)).await;
            match result {
                Ok(record) => {
                    note.set(String::new());
                    banner.set(Some(Banner::Success(format!(
                        "{}: {} ({})",
                        action.label,
                        record.subject.name,
                        record.current_stage.label()
                    ))));
                }
                Err(e) => {
                    log::warn!("{} {}: '{}' failed: {}", D::full_name(), id, action.id, e);
                    banner.set(Some(Banner::Error(e.user_message())));
                }
            }
            pending.update(|p| {
                p.remove(&id);
            });
            revision.update(|r| *r += 1);
        });
    };

    let visible = move || {
        revision.track();
        let q = query.get();
        session.with_value(|s| s.with_store(|store| q.apply(store)))
    };

    let total = move || {
        revision.track();
        session.with_value(|s| s.with_store(|store| store.len()))
    };

    let current = move || {
        revision.track();
        selected
            .get()
            .and_then(|id| session.with_value(|s| s.with_store(|store| store.get(&id).cloned())))
    };

    fetch();

    view! {
        <div class="content lifecycle-board">
            <div class="header">
                <div>
                    <h2>{title}</h2>
                    <p class="header__subtitle">{subtitle}</p>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fill()>
                        {icon("download")}
                        {"Demo data"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || banner.get().map(|b| {
                let (class, text) = match b {
                    Banner::Error(text) => ("banner banner--error", text),
                    Banner::Success(text) => ("banner banner--success", text),
                };
                view! {
                    <div class=class>
                        <span>{text}</span>
                        <button class="banner__close" on:click=move |_| banner.set(None)>"×"</button>
                    </div>
                }
            })}

            <div class="filters">
                <div class="filters__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by name, email, role, department or code..."
                        prop:value=move || query.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.search = value);
                        }
                    />
                </div>
                <select on:change=move |ev| {
                    let code = event_target_value(&ev);
                    query.update(|q| q.stage = D::Stage::from_code(&code));
                }>
                    <option value="">{"All stages"}</option>
                    {StatusCatalog::<D>::stages().iter().map(|stage| view! {
                        <option value={stage.code()}>{stage.label()}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let code = event_target_value(&ev);
                    query.update(|q| q.reason = D::Reason::from_code(&code));
                }>
                    <option value="">{"All reasons"}</option>
                    {D::Reason::all().iter().map(|reason| view! {
                        <option value={reason.code()}>{reason.label()}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let code = event_target_value(&ev);
                    query.update(|q| q.sort = SortKey::from_code(&code));
                }>
                    {SortKey::all().iter().map(|key| view! {
                        <option value={key.code()}>{format!("Sort: {}", key.label())}</option>
                    }).collect_view()}
                </select>
                <button class="button button--ghost" on:click=move |_| query.update(|q| q.ascending = !q.ascending)>
                    {move || if query.get().ascending { "↑" } else { "↓" }}
                </button>
            </div>

            <div class="lifecycle-board__body">
                <div class="lifecycle-board__list">
                    <div class="lifecycle-board__count">
                        {move || format!("{} ({} of {})", D::list_name(), visible().len(), total())}
                    </div>
                    {move || {
                        let rows = visible();
                        if rows.is_empty() {
                            let text = if loading.get() { "Loading..." } else { "No records match the current filter" };
                            return view! { <div class="lifecycle-board__empty">{icon("inbox")}{text}</div> }.into_any();
                        }
                        rows.into_iter().map(|record| {
                            let id = record.id.clone();
                            let id_for_class = id.clone();
                            let style = StatusCatalog::<D>::style_for(record.current_stage);
                            let percent = ChecklistProgress::<D>::percent_complete(&record);
                            let has_checklist = ChecklistProgress::<D>::total() > 0;
                            view! {
                                <div
                                    class="lifecycle-card"
                                    class:lifecycle-card--selected=move || selected.get().as_deref() == Some(id_for_class.as_str())
                                    on:click=move |_| select_record(selected, note, id.clone())
                                >
                                    <div class="lifecycle-card__top">
                                        <div>
                                            <div class="lifecycle-card__name">{record.subject.name.clone()}</div>
                                            <div class="lifecycle-card__meta">
                                                {format!("{} · {} · {}", record.code, record.subject.role, record.subject.department)}
                                            </div>
                                        </div>
                                        <span class={format!("stage-badge {}", style.color)}>
                                            {icon(style.icon)}
                                            {record.current_stage.label()}
                                        </span>
                                    </div>
                                    <div class="lifecycle-card__badges">{badges(&record)}</div>
                                    {has_checklist.then(|| view! {
                                        <div class="progress">
                                            <div class="progress__bar" style={format!("width: {}%", percent)}></div>
                                            <span class="progress__label">{format!("{}%", percent)}</span>
                                        </div>
                                    })}
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>

                <div class="lifecycle-board__detail">
                    {move || match current() {
                        None => view! {
                            <div class="lifecycle-board__empty">{format!("Select {} to see details", D::element_name())}</div>
                        }.into_any(),
                        Some(record) => record_panel(record, details, note, pending, run_action).into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Панель выбранной записи
fn record_panel<D, F>(
    record: LifecycleRecord<D>,
    details: fn(&LifecycleRecord<D>) -> AnyView,
    note: RwSignal<String>,
    pending: RwSignal<HashSet<String>>,
    run_action: F,
) -> impl IntoView
where
    D: LifecycleDefinition,
    F: Fn(String, LifecycleAction) + Copy + Send + Sync + 'static,
{
    let style = StatusCatalog::<D>::style_for(record.current_stage);
    let actions = ActionResolver::<D>::actions_for_record(&record);
    let checklist = ChecklistProgress::<D>::items(&record);
    let done = ChecklistProgress::<D>::completed_count(&record);
    let total = ChecklistProgress::<D>::total();
    let reason = record.reason.as_ref().map(|r| {
        format!(
            "{}{}",
            r.category.label(),
            if r.details.is_empty() {
                String::new()
            } else {
                format!(": {}", r.details)
            }
        )
    });

    view! {
        <div class="record-panel">
            <div class="record-panel__header">
                <div>
                    <h3>{record.subject.name.clone()}</h3>
                    <div class="record-panel__meta">{record.subject.email.clone()}</div>
                    <div class="record-panel__meta">
                        {format!("{} · {}", record.subject.role, record.subject.organization)}
                    </div>
                </div>
                <span class={format!("stage-badge {}", style.color)}>
                    {icon(style.icon)}
                    {record.current_stage.label()}
                </span>
            </div>

            {reason.map(|text| view! { <div class="record-panel__reason">{format!("Reason: {}", text)}</div> })}
            <div class="record-panel__details">{details(&record)}</div>

            {(total > 0).then(|| view! {
                <div class="record-panel__section">
                    <h4>{format!("Checklist ({}/{})", done, total)}</h4>
                    <ul class="checklist">
                        {checklist.into_iter().map(|row| {
                            let entry = record.stage_flags.get(&row.item).cloned().unwrap_or_default();
                            view! {
                                <li class="checklist__item" class:checklist__item--done={row.completed}>
                                    {icon(if row.completed { "check-circle" } else { "minus" })}
                                    <span>{row.label}</span>
                                    {entry.completed_date.map(|d| view! { <span class="checklist__date">{format_date(d)}</span> })}
                                    {entry.assignee.map(|a| view! { <span class="checklist__assignee">{a}</span> })}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            })}

            <div class="record-panel__section">
                <h4>{"Actions"}</h4>
                <textarea
                    class="record-panel__note"
                    placeholder="Notes (required for some actions)"
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                ></textarea>
                <div class="record-panel__actions">
                    {actions.into_iter().map(|action| {
                        let id = record.id.clone();
                        let id_for_disabled = id.clone();
                        let disabled = move || {
                            pending.with(|p| p.contains(&id_for_disabled))
                                || (action.requires_note && note.with(|n| n.trim().is_empty()))
                        };
                        view! {
                            <button
                                class={action.severity.button_class()}
                                disabled=disabled
                                title={if action.requires_note { "Requires a note" } else { "" }}
                                on:click=move |_| run_action(id.clone(), action)
                            >
                                {action.label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="record-panel__section">
                <h4>{format!("History ({})", record.notes.len())}</h4>
                {audit_trail::<D>(&record.notes)}
            </div>
        </div>
    }
}

/// Черновик заметки относится к выбранной записи: при выборе другой записи он сбрасывается
fn select_record(selected: RwSignal<Option<String>>, note: RwSignal<String>, id: String) {
    if selected.with_untracked(|current| current.as_deref() == Some(id.as_str())) {
        return;
    }
    note.set(String::new());
    selected.set(Some(id));
}

fn audit_trail<D: LifecycleDefinition>(notes: &[AuditNote]) -> impl IntoView {
    if notes.is_empty() {
        return view! { <div class="audit__empty">{"No entries yet"}</div> }.into_any();
    }
    view! {
        <ul class="audit">
            {notes.iter().rev().cloned().map(|n| {
                let movement = match (&n.from_stage, &n.to_stage) {
                    (Some(from), Some(to)) => Some(format!(
                        "{} → {}",
                        StatusCatalog::<D>::label_for_code(from),
                        StatusCatalog::<D>::label_for_code(to)
                    )),
                    _ => None,
                };
                view! {
                    <li class="audit__entry">
                        <div class="audit__head">
                            <span class="audit__author">{n.author}</span>
                            <span class="audit__time">{format_datetime(n.timestamp)}</span>
                        </div>
                        {movement.map(|m| view! { <div class="audit__move">{m}</div> })}
                        <div class="audit__content">{n.content}</div>
                        {(!n.details.is_empty()).then(|| view! {
                            <div class="audit__details">
                                {n.details.iter().map(|(key, value)| {
                                    let text = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
                                    view! { <span class="audit__detail">{format!("{}: {}", key, text)}</span> }
                                }).collect_view()}
                            </div>
                        })}
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_any()
}

// ============================================================================
// Элементы для полей конкретных видов
// ============================================================================

/// Цветной бейдж (классы вида "bg-red-100 text-red-800")
pub fn badge(color: &str, text: impl Into<String>) -> AnyView {
    let class = format!("badge {}", color);
    let text = text.into();
    view! { <span class=class>{text}</span> }.into_any()
}

/// Строка "подпись: значение" в панели записи
pub fn field(label: &'static str, value: impl Into<String>) -> AnyView {
    let value = value.into();
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <span class="field__value">{value}</span>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_draft_does_not_follow_other_record() {
        let selected = RwSignal::new(None::<String>);
        let note = RwSignal::new(String::new());

        select_record(selected, note, "a".to_string());
        note.set("Laptop returned".to_string());
        select_record(selected, note, "a".to_string());
        assert_eq!(note.get_untracked(), "Laptop returned");

        select_record(selected, note, "b".to_string());
        assert_eq!(selected.get_untracked().as_deref(), Some("b"));
        assert_eq!(note.get_untracked(), "");
    }
}
