use leptos::prelude::*;

/// SVG-иконка по имени (набор в стиле lucide). Неизвестное имя даёт часы.
pub fn icon(name: &str) -> AnyView {
    let paths: &'static [&'static str] = icon_paths(name);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
    .into_any()
}

fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        // стадии
        "alert-circle" => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8v4", "M12 16h.01"],
        "alert-triangle" => &[
            "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        "archive" => &["M21 8v13H3V8", "M1 3h22v5H1z", "M10 12h4"],
        "award" => &[
            "M12 2a7 7 0 1 0 0 14 7 7 0 0 0 0-14z",
            "M8.21 13.89 7 23l5-3 5 3-1.21-9.12",
        ],
        "calendar" => &[
            "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M16 2v4",
            "M8 2v4",
            "M3 10h18",
        ],
        "certificate" => &[
            "M4 4h16v12H4z",
            "M8 8h8",
            "M8 12h4",
            "M15 16v5l2-1 2 1v-5",
        ],
        "check-circle" => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
        "clock" => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
        "credit-card" => &[
            "M3 5h18a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
            "M1 10h22",
        ],
        "crown" => &["M2 4l3 12h14l3-12-6 7-4-7-4 7-6-7z", "M5 20h14"],
        "eye" => &[
            "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
            "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
        ],
        "file-check" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M9 15l2 2 4-4",
        ],
        "file-text" => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
            "M16 13H8",
            "M16 17H8",
        ],
        "layers" => &["M12 2 2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
        "lock" => &[
            "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
            "M7 11V7a5 5 0 0 1 10 0v4",
        ],
        "message-square" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "minus" => &["M5 12h14"],
        "network" => &[
            "M9 2h6v6H9z",
            "M2 16h6v6H2z",
            "M16 16h6v6h-6z",
            "M5 16v-4h14v4",
            "M12 12V8",
        ],
        "package" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "presentation" => &["M2 3h20", "M3 3v11a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V3", "M7 21l5-5 5 5"],
        "send" => &["M22 2 11 13", "M22 2 15 22l-4-9-9-4 20-7z"],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "star" => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        "target" => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
            "M12 6a6 6 0 1 0 0 12 6 6 0 0 0 0-12z",
            "M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
        ],
        "timer" => &["M10 2h4", "M12 14l3-3", "M12 6a8 8 0 1 0 0 16 8 8 0 0 0 0-16z"],
        "trending-up" => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
        "trophy" => &[
            "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
            "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
            "M4 22h16",
            "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
            "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
            "M18 2H6v7a6 6 0 0 0 12 0V2z",
        ],
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "x-circle" => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M15 9l-6 6", "M9 9l6 6"],
        // элементы интерфейса
        "search" => &["M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z", "M21 21l-4.35-4.35"],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "download" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "user-minus" => &[
            "M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M8.5 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            "M23 11h-6",
        ],
        "graduation-cap" => &["M22 10 12 5 2 10l10 5 10-5z", "M6 12v5c3 3 9 3 12 0v-5"],
        "inbox" => &[
            "M22 12h-6l-2 3h-4l-2-3H2",
            "M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
        ],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 6v6l4 2"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_falls_back_to_clock() {
        assert_eq!(icon_paths("no-such-icon"), icon_paths("clock"));
        assert_ne!(icon_paths("lock"), icon_paths("clock"));
    }
}
