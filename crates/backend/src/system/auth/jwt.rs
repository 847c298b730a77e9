use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::shared::config::AuthConfig;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Установить секрет подписи из конфигурации.
/// Пустой секрет в конфиге заменяется случайным (токены не переживают рестарт).
pub fn initialize(config: &AuthConfig) -> Result<()> {
    let secret = if config.jwt_secret.trim().is_empty() {
        if config.enabled {
            tracing::warn!("auth.jwt_secret is empty, using a generated secret");
        }
        generate_jwt_secret()
    } else {
        config.jwt_secret.clone()
    };
    JWT_SECRET
        .set(secret)
        .map_err(|_| anyhow::anyhow!("JWT secret is already initialized"))
}

fn jwt_secret() -> Result<&'static str> {
    JWT_SECRET
        .get()
        .map(String::as_str)
        .context("JWT secret has not been initialized")
}

/// Generate JWT access token with 24 hours lifetime
pub fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    encode_claims(user_id, username, is_admin, jwt_secret()?)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_claims(token, jwt_secret()?)
}

fn encode_claims(user_id: &str, username: &str, is_admin: bool, secret: &str) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_keeps_username() {
        let token = encode_claims("u-1", "maria.hr", false, "secret-a").unwrap();
        let claims = decode_claims(&token, "secret-a").unwrap();
        assert_eq!(claims.username, "maria.hr");
        assert_eq!(claims.sub, "u-1");
    }

    #[test]
    fn test_token_with_other_secret_is_rejected() {
        let token = encode_claims("u-1", "maria.hr", false, "secret-a").unwrap();
        assert!(decode_claims(&token, "secret-b").is_err());
    }

    #[test]
    fn test_generated_secret_is_random() {
        assert_ne!(generate_jwt_secret(), generate_jwt_secret());
    }
}
