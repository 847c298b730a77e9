use serde::{Deserialize, Serialize};

/// Claims access-токена. Имя пользователя попадает в журнал записи как автор действия.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub is_admin: bool,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}
