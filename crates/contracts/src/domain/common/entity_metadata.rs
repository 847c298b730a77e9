use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные записи жизненного цикла (ведутся сервером)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    /// Версия для optimistic locking
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    /// Создать новые метаданные для новой записи
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Метаданные с фиксированным моментом создания
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Обновить timestamp и увеличить версию
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
