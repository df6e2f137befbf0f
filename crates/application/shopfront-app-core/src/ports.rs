use std::sync::Arc;

use crate::domain::CheckoutStage;
use shopfront_core::{BuyerInfo, OrderDraft, OrderReceipt, Product, ValidationErrors};

/// The store backend as the application sees it: one catalog fetch at boot,
/// one order submission per checkout.
#[async_trait::async_trait]
pub trait OrderGateway: Send + Sync + 'static {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<Product>>;
    async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt>;
}

#[async_trait::async_trait]
impl<G: OrderGateway + ?Sized> OrderGateway for Arc<G> {
    async fn fetch_catalog(&self) -> anyhow::Result<Vec<Product>> {
        (**self).fetch_catalog().await
    }
    async fn submit_order(&self, draft: &OrderDraft) -> anyhow::Result<OrderReceipt> {
        (**self).submit_order(draft).await
    }
}

/// Sink for everything the user sees. The wiring feeds it from bus events;
/// implementations render however they like (the CLI prints, tests record).
pub trait ShopView: Send + Sync + 'static {
    fn render_catalog(&self, products: &[Product]);
    fn show_preview(&self, product: &Product, in_basket: bool);
    fn render_basket(&self, items: &[Product], total: u64);
    fn set_basket_count(&self, count: usize);
    fn show_validation(&self, errors: &ValidationErrors);
    fn show_stage(&self, stage: CheckoutStage, buyer: &BuyerInfo);
    fn show_success(&self, receipt: &OrderReceipt);
}
