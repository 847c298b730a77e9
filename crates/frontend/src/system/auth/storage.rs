use web_sys::window;

use crate::shared::lifecycle::transport::CredentialProvider;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token.trim());
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

/// Токен из localStorage; читается заново перед каждым запросом
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredToken;

impl CredentialProvider for StoredToken {
    fn bearer_token(&self) -> Option<String> {
        get_access_token()
    }
}
