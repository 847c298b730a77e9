use contracts::shared::lifecycle::TransitionError;
use thiserror::Error;

/// Ошибки работы с записями жизненного цикла на клиенте
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Сеть, HTTP-статус или разбор ответа
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("no response within {0} s")]
    Timeout(u32),
    /// Сервер ответил `success: false`
    #[error("{0}")]
    Application(String),
    /// Действие отклонено локальной проверкой, запрос не отправлялся
    #[error("{0}")]
    Validation(String),
    #[error("record '{0}' already has an action in progress")]
    Busy(String),
    #[error("record '{0}' not found")]
    NotFound(String),
}

impl LifecycleError {
    /// Текст для баннера над списком
    pub fn user_message(&self) -> String {
        match self {
            LifecycleError::Transport(_) => "An unexpected error occurred".to_string(),
            LifecycleError::Timeout(_) => {
                "The server did not respond in time, please try again".to_string()
            }
            LifecycleError::Application(message) | LifecycleError::Validation(message) => {
                message.clone()
            }
            LifecycleError::Busy(_) => "Please wait for the current action to finish".to_string(),
            LifecycleError::NotFound(_) => {
                "The record is no longer available, refresh the list".to_string()
            }
        }
    }

    /// Повтор того же действия имеет смысл
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LifecycleError::Transport(_) | LifecycleError::Timeout(_) | LifecycleError::Busy(_)
        )
    }
}

impl From<TransitionError> for LifecycleError {
    fn from(e: TransitionError) -> Self {
        LifecycleError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_details_are_hidden() {
        let err = LifecycleError::Transport("HTTP 502".to_string());
        assert_eq!(err.user_message(), "An unexpected error occurred");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_rule_text_is_shown_as_is() {
        let err: LifecycleError = TransitionError::NoteRequired {
            action: "Reject".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Please provide a reason for 'Reject'");
        assert!(!err.is_retryable());
    }
}
