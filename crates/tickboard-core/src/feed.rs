use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{FeedError, Resource};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Read boundary to the dashboard backend. Implementations return the raw
/// JSON payload for one resource; normalization happens downstream.
pub trait StockFeed: Send + Sync {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Value, FeedError>> + Send + 'a>>;
}

/// HTTP-backed feed issuing `GET {base_url}{resource}` reads.
#[derive(Clone)]
pub struct HttpStockFeed {
    base_url: String,
    http_client: Arc<dyn HttpClient>,
}

impl HttpStockFeed {
    /// Build a feed against `base_url` using the production transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(base_url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn url_for(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), resource.path())
    }
}

impl StockFeed for HttpStockFeed {
    fn fetch<'a>(
        &'a self,
        resource: Resource,
    ) -> Pin<Box<dyn Future<Output = Result<Value, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(self.url_for(resource));
            let response = self
                .http_client
                .execute(request)
                .await
                .map_err(|error| FeedError::transport(resource, error.message()))?;

            if !response.is_success() {
                return Err(FeedError::transport(
                    resource,
                    format!("upstream returned status {}", response.status),
                ));
            }

            serde_json::from_str(&response.body)
                .map_err(|error| FeedError::parse(resource, error.to_string()))
        })
    }
}
