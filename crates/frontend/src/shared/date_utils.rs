//! Форматирование дат для списков и журнала

use chrono::{DateTime, Utc};

/// "15.03.2024 14:02"
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// "15.03.2024"
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Дата или прочерк
pub fn format_optional_date(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "-".to_string())
}
