//! `reqwest` implementation of [`FoodBackend`].

use std::time::{Duration, Instant};

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::api::FoodBackend;
use crate::config::{ApiConfig, RetryConfig};
use crate::food::{CreateFoodPlate, FoodId, FoodPlate};
use crate::http::request::{RequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::resilience::{is_retryable, RetryPolicy};

/// Client for a food plate REST backend.
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: Url,
    retries: RetryConfig,
}

impl HttpFoodApi {
    pub fn new(api: &ApiConfig, retries: &RetryConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.request_timeout_secs))
            .connect_timeout(Duration::from_secs(api.connect_timeout_secs))
            .build()?;
        Self::with_client(client, &api.base_url, retries)
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str, retries: &RetryConfig) -> ApiResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client,
            base_url,
            retries: retries.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> ApiResult<Url> {
        Ok(self.base_url.join("foods")?)
    }

    fn item_url(&self, id: FoodId) -> ApiResult<Url> {
        Ok(self.base_url.join(&format!("foods/{}", id))?)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let policy = RetryPolicy::for_method(&self.retries, &method);
        let mut attempts = 0;

        loop {
            attempts += 1;
            let request_id = RequestId::new();
            let start = Instant::now();

            tracing::debug!(
                request_id = %request_id,
                method = %method,
                path = %url.path(),
                attempt = attempts,
                "Calling food API"
            );

            let mut request = self
                .client
                .request(method.clone(), url.clone())
                .header(X_REQUEST_ID, request_id.to_string());
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    metrics::record_api_request(method.as_str(), status.as_u16(), start);

                    if is_retryable(&method, Some(status), false) {
                        if let Some(backoff) = policy.next_delay(attempts) {
                            tracing::info!(request_id = %request_id, attempt = attempts, delay = ?backoff.capped, jitter = ?backoff.jitter, status = %status, "Retrying request");
                            tokio::time::sleep(backoff.total()).await;
                            continue;
                        }
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        tracing::warn!(request_id = %request_id, method = %method, path = %url.path(), status = %status, "Food API rejected request");
                        return Err(ApiError::Status { status, body });
                    }

                    return Ok(response);
                }
                Err(e) => {
                    metrics::record_api_request(method.as_str(), 0, start);
                    let connection_error = e.is_connect() || e.is_timeout();

                    if is_retryable(&method, None, connection_error) {
                        if let Some(backoff) = policy.next_delay(attempts) {
                            tracing::info!(request_id = %request_id, attempt = attempts, delay = ?backoff.capped, jitter = ?backoff.jitter, error = %e, "Retrying after network error");
                            tokio::time::sleep(backoff.total()).await;
                            continue;
                        }
                    }

                    tracing::error!(request_id = %request_id, method = %method, path = %url.path(), error = %e, "Food API unreachable");
                    return Err(ApiError::Http(e));
                }
            }
        }
    }

    async fn send_json<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(method, url, body).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl FoodBackend for HttpFoodApi {
    async fn list(&self) -> ApiResult<Vec<FoodPlate>> {
        let url = self.collection_url()?;
        self.send_json::<(), _>(Method::GET, url, None).await
    }

    async fn create(&self, food: &CreateFoodPlate) -> ApiResult<FoodPlate> {
        let url = self.collection_url()?;
        self.send_json(Method::POST, url, Some(food)).await
    }

    async fn update(&self, food: &FoodPlate) -> ApiResult<FoodPlate> {
        let url = self.item_url(food.id)?;
        self.send_json(Method::PUT, url, Some(food)).await
    }

    async fn delete(&self, id: FoodId) -> ApiResult<()> {
        let url = self.item_url(id)?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpFoodApi {
        HttpFoodApi::with_client(Client::new(), base, &RetryConfig::default()).unwrap()
    }

    #[test]
    fn test_urls_from_bare_host() {
        let api = api("http://localhost:3333");
        assert_eq!(api.collection_url().unwrap().as_str(), "http://localhost:3333/foods");
        assert_eq!(api.item_url(4).unwrap().as_str(), "http://localhost:3333/foods/4");
    }

    #[test]
    fn test_urls_keep_base_path() {
        let without_slash = api("http://example.com/api");
        assert_eq!(without_slash.collection_url().unwrap().as_str(), "http://example.com/api/foods");

        let with_slash = api("http://example.com/api/");
        assert_eq!(with_slash.item_url(12).unwrap().as_str(), "http://example.com/api/foods/12");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let err = HttpFoodApi::with_client(Client::new(), "not a url", &RetryConfig::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
