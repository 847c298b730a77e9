use serde::{Deserialize, Serialize};

/// Обёртка ответа API: `{ success, data?, error?, message? }`
///
/// Ошибка уровня приложения приходит с HTTP 200 и `success: false`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    /// Без `default`: иначе derive требует `T: Default`, а записи его не имеют
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Данные при успехе; иначе текст ошибки сервера или `fallback`
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .or(self.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())),
        }
    }
}
