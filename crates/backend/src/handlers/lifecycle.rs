use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    Json,
};
use contracts::shared::api::ApiEnvelope;
use contracts::shared::lifecycle::{ActionRequest, LifecycleDefinition, LifecycleRecord};
use serde_json::Value;

use crate::domain::lifecycle::{seed::DemoData, service, service::ServiceError};
use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;

/// Ошибка сервиса в ответ клиенту: сбой хранилища даёт 500, остальное `success: false`
fn into_response<T>(err: ServiceError) -> Result<Json<ApiEnvelope<T>>, StatusCode> {
    if err.is_storage() {
        tracing::error!("Lifecycle storage failure: {:#}", err);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(ApiEnvelope::fail(err.to_string())))
}

/// GET <endpoint>
pub async fn list<D: LifecycleDefinition>(
) -> Result<Json<ApiEnvelope<Vec<LifecycleRecord<D>>>>, StatusCode> {
    match service::list::<D>(get_connection()).await {
        Ok(records) => Ok(Json(ApiEnvelope::ok(records))),
        Err(e) => into_response(e),
    }
}

/// PATCH <endpoint>/:id/{action|status|decision}
pub async fn apply<D: LifecycleDefinition>(
    Path(id): Path<String>,
    user: Option<CurrentUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope<LifecycleRecord<D>>>, StatusCode> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return Ok(Json(ApiEnvelope::fail(rejection.body_text()))),
    };
    let request = match ActionRequest::from_body(D::patch_style(), &body) {
        Ok(request) => request,
        Err(message) => return into_response(ServiceError::BadRequest(message)),
    };

    let author = CurrentUser::author(user.as_ref());
    match service::apply::<D>(get_connection(), &id, &request, &author).await {
        Ok(record) => {
            let message = format!("{} updated", capitalize(D::element_name()));
            Ok(Json(ApiEnvelope::ok_with_message(record, message)))
        }
        Err(e) => {
            if !e.is_storage() {
                tracing::warn!("{} {}: '{}' rejected: {}", D::full_name(), id, request.action, e);
            }
            into_response(e)
        }
    }
}

/// POST <endpoint>/testdata
pub async fn insert_test_data<D: DemoData>() -> Result<Json<ApiEnvelope<usize>>, StatusCode> {
    match service::insert_test_data::<D>(get_connection()).await {
        Ok(0) => Ok(Json(ApiEnvelope::ok_with_message(
            0,
            format!("{} already contains data", D::list_name()),
        ))),
        Ok(n) => Ok(Json(ApiEnvelope::ok(n))),
        Err(e) => into_response(e),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("intern"), "Intern");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_storage_failure_is_http_error() {
        let storage = ServiceError::Storage(anyhow::anyhow!("disk full"));
        let res: Result<Json<ApiEnvelope<()>>, StatusCode> = into_response(storage);
        assert_eq!(res.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);

        let app = ServiceError::BadRequest("Field 'status' is required".to_string());
        let Json(envelope) = into_response::<()>(app).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Field 'status' is required"));
    }
}
