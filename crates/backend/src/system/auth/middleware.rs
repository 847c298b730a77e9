use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = super::jwt::validate_token(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        StatusCode::UNAUTHORIZED
    })?;

    // Claims доступны обработчикам через CurrentUser
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
