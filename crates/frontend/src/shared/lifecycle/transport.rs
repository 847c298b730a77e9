use async_trait::async_trait;
use contracts::shared::api::ApiEnvelope;
use contracts::shared::lifecycle::{ActionRequest, LifecycleDefinition, LifecycleRecord};
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;

use super::error::LifecycleError;
use crate::shared::api_utils::api_base;

/// Таймаут запроса по умолчанию
pub const DEFAULT_TIMEOUT_SECS: u32 = 15;

/// Обмен с сервером для одного вида жизненного цикла
#[async_trait(?Send)]
pub trait LifecycleTransport<D: LifecycleDefinition> {
    /// Все записи вида
    async fn list(&self) -> Result<Vec<LifecycleRecord<D>>, LifecycleError>;

    /// Выполнить действие; сервер возвращает полную новую версию записи
    async fn apply(
        &self,
        id: &str,
        request: &ActionRequest,
    ) -> Result<LifecycleRecord<D>, LifecycleError>;
}

/// Источник Bearer-токена для запросов
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<String>;
}

// ============================================================================
// HTTP
// ============================================================================

pub struct HttpLifecycleTransport<D, C> {
    base_url: String,
    credentials: C,
    timeout_secs: u32,
    _kind: PhantomData<D>,
}

impl<D: LifecycleDefinition, C: CredentialProvider> HttpLifecycleTransport<D, C> {
    /// Транспорт к серверу, с которого загружена страница (порт 3000)
    pub fn new(credentials: C) -> Self {
        Self::with_base_url(api_base(), credentials)
    }

    pub fn with_base_url(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            _kind: PhantomData,
        }
    }

    pub fn timeout(mut self, secs: u32) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match self.credentials.bearer_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: Request,
        fallback: String,
    ) -> Result<T, LifecycleError> {
        let response = with_timeout(self.timeout_secs, request.send())
            .await?
            .map_err(|e| LifecycleError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(LifecycleError::Transport(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| LifecycleError::Transport(format!("Failed to parse response: {}", e)))?;
        envelope
            .into_result(&fallback)
            .map_err(LifecycleError::Application)
    }

    /// Заполнить пустую коллекцию демо-записями
    pub async fn fill_test_data(&self) -> Result<usize, LifecycleError> {
        let path = format!("{}/testdata", D::endpoint());
        let request = self
            .authorize(Request::post(&self.url(&path)))
            .build()
            .map_err(|e| LifecycleError::Transport(e.to_string()))?;
        self.send(request, format!("Failed to fill {}", D::list_name()))
            .await
    }
}

#[async_trait(?Send)]
impl<D: LifecycleDefinition, C: CredentialProvider> LifecycleTransport<D>
    for HttpLifecycleTransport<D, C>
{
    async fn list(&self) -> Result<Vec<LifecycleRecord<D>>, LifecycleError> {
        let request = self
            .authorize(Request::get(&self.url(D::endpoint())))
            .build()
            .map_err(|e| LifecycleError::Transport(e.to_string()))?;
        self.send(request, format!("Failed to fetch {}", D::list_name()))
            .await
    }

    async fn apply(
        &self,
        id: &str,
        request: &ActionRequest,
    ) -> Result<LifecycleRecord<D>, LifecycleError> {
        let style = D::patch_style();
        let path = style.path(D::endpoint(), id);
        let http_request = self
            .authorize(Request::patch(&self.url(&path)))
            .json(&request.to_body(style))
            .map_err(|e| LifecycleError::Transport(e.to_string()))?;
        self.send(http_request, format!("Failed to update {}", D::element_name()))
            .await
    }
}

/// Ожидание не дольше `secs` секунд
async fn with_timeout<F: Future>(secs: u32, future: F) -> Result<F::Output, LifecycleError> {
    let timer = TimeoutFuture::new(secs.saturating_mul(1000));
    match select(Box::pin(future), Box::pin(timer)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => {
            log::warn!("Request timed out after {} s", secs);
            Err(LifecycleError::Timeout(secs))
        }
    }
}
