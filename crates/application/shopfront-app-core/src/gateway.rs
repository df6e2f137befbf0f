use anyhow::Context;

use crate::ports::OrderGateway;
use shopfront_core::{OrderDraft, OrderReceipt, Product};
use shopfront_infra::{default_http_client, StoreApi};

/// [`OrderGateway`] over the real HTTP API.
pub struct HttpOrderGateway {
    api: StoreApi,
}

impl HttpOrderGateway {
    pub fn new(api: StoreApi) -> Self {
        Self { api }
    }

    /// Builds a gateway against the configured API base
    /// (`SHOPFRONT_API_URL` or the built-in default).
    pub fn from_env() -> anyhow::Result<Self> {
        let client = default_http_client().context("Failed to build HTTP client")?;
        let api = StoreApi::new(client, &shopfront_config::api_base())?;
        Ok(Self::new(api))
    }
}

#[async_trait::async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.api.fetch_catalog().await?)
    }

    async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
        Ok(self.api.submit_order(draft).await?)
    }
}
