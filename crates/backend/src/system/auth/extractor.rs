use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Автор записей журнала, если авторизация выключена или токена нет
pub const DEFAULT_AUTHOR: &str = "Company Admin";

/// Extractor for getting current user from JWT token
/// Usage in handlers: `async fn handler(user: Option<CurrentUser>) -> Response`
pub struct CurrentUser(pub TokenClaims);

impl CurrentUser {
    /// Имя автора для журнала записи
    pub fn author(user: Option<&CurrentUser>) -> String {
        user.map(|CurrentUser(claims)| claims.username.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims кладёт в extensions middleware require_auth
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_falls_back_to_company_admin() {
        assert_eq!(CurrentUser::author(None), "Company Admin");

        let user = CurrentUser(TokenClaims {
            sub: "u-7".into(),
            username: "olga.k".into(),
            is_admin: true,
            exp: 0,
            iat: 0,
        });
        assert_eq!(CurrentUser::author(Some(&user)), "olga.k");
    }
}
