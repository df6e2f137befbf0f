use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use shopfront_core::{OrderDraft, OrderReceipt, Product};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api base url is empty")]
    MissingBaseUrl,
    #[error("invalid api base url \"{url}\": {message}")]
    InvalidBaseUrl { url: String, message: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Builds a client with the configured timeout and user agent.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(shopfront_config::REQUEST_TIMEOUT_SECS))
        .user_agent(shopfront_config::USER_AGENT)
        .build()
}

#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    items: Vec<Product>,
}

/// Thin client for the two store endpoints: catalog fetch and order
/// submission. No retries; every failure surfaces as an [`ApiError`].
#[derive(Debug, Clone)]
pub struct StoreApi {
    client: Client,
    base: Url,
}

impl StoreApi {
    /// Fails on an empty or unparseable base URL. The base is normalized to
    /// a directory URL so endpoint joins extend the path instead of
    /// replacing it.
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::MissingBaseUrl);
        }

        let mut base = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET <base>/product`, unwrapping the `{ "items": [...] }` envelope.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let envelope: CatalogEnvelope = self.get_json(shopfront_config::CATALOG_PATH).await?;
        debug!(count = envelope.items.len(), "catalog fetched");
        Ok(envelope.items)
    }

    /// `POST <base>/order`. The write helper is generalized over
    /// POST/PUT/DELETE; orders always go out as POST.
    pub async fn submit_order(&self, draft: &OrderDraft) -> Result<OrderReceipt, ApiError> {
        let receipt: OrderReceipt = self
            .send_json(Method::POST, shopfront_config::ORDER_PATH, draft)
            .await?;
        debug!(order_id = %receipt.id, total = receipt.total, "order accepted");
        Ok(receipt)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: format!("{}{path}", self.base),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let request = self.client.get(url.clone());
        Self::read_json(url, request).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let request = self.client.request(method, url.clone()).json(body);
        Self::read_json(url, request).await
    }

    async fn read_json<T: DeserializeOwned>(
        url: Url,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Request {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::Request {
            url: url.to_string(),
            source: e,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::PaymentMethod;

    #[test]
    fn empty_base_url_is_a_construction_error() {
        let client = Client::new();
        assert!(matches!(
            StoreApi::new(client.clone(), ""),
            Err(ApiError::MissingBaseUrl)
        ));
        assert!(matches!(
            StoreApi::new(client, "   "),
            Err(ApiError::MissingBaseUrl)
        ));
    }

    #[test]
    fn unparseable_base_url_is_a_construction_error() {
        let err = StoreApi::new(Client::new(), "not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_path_on_join() {
        let api = StoreApi::new(Client::new(), "http://host/api/shop").unwrap();
        let url = api.endpoint(shopfront_config::CATALOG_PATH).unwrap();
        assert_eq!(url.as_str(), "http://host/api/shop/product");
    }

    #[test]
    fn order_draft_serializes_to_the_wire_shape() {
        let draft = OrderDraft {
            payment: PaymentMethod::Card,
            email: "a@b.com".to_string(),
            phone: "+1".to_string(),
            address: "x".to_string(),
            total: 300,
            items: vec!["1".to_string(), "2".to_string()],
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "payment": "card",
                "email": "a@b.com",
                "phone": "+1",
                "address": "x",
                "total": 300,
                "items": ["1", "2"],
            })
        );
    }

    #[test]
    fn catalog_envelope_decodes_items_and_null_prices() {
        let body = r#"{
            "total": 2,
            "items": [
                { "id": "1", "title": "Товар 1", "description": "", "image": "1.svg", "category": "другое", "price": 100 },
                { "id": "2", "title": "Товар 2", "description": "", "image": "2.svg", "category": "другое", "price": null }
            ]
        }"#;

        let envelope: CatalogEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.items.len(), 2);
        assert_eq!(envelope.items[0].price, Some(100));
        assert_eq!(envelope.items[1].price, None);
    }
}
