use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::console::ConsoleView;
use shopfront_app_core::{
    format_price, HttpOrderGateway, ShopApplication, ShopCommand, ShopEvent, Topic,
};
use shopfront_core::{FormField, OrderReceipt, PaymentMethod, Product, ProductId};
use shopfront_infra::{default_http_client, StoreApi};

fn store_api(api_base: &str) -> anyhow::Result<StoreApi> {
    let client = default_http_client().context("Failed to build HTTP client")?;
    Ok(StoreApi::new(client, api_base)?)
}

/// Fetches and prints the catalog.
pub async fn cmd_catalog(api_base: &str) -> anyhow::Result<Vec<Product>> {
    let api = store_api(api_base)?;
    let products = api.fetch_catalog().await?;

    for product in &products {
        println!(
            "{:<24} {:<40} {}",
            product.id,
            product.title,
            format_price(product.price)
        );
    }
    println!("{} products", products.len());
    Ok(products)
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub items: Vec<ProductId>,
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Drives the full wiring headless: bootstrap, fill the basket, walk the
/// checkout stages, submit, and hand back the receipt.
pub async fn cmd_order(api_base: &str, request: CheckoutRequest) -> anyhow::Result<OrderReceipt> {
    let gateway = HttpOrderGateway::new(store_api(api_base)?);
    let view = Arc::new(ConsoleView);
    let app = ShopApplication::new(gateway, view);

    // The receipt travels by event, like any other outcome.
    let receipt: Arc<Mutex<Option<OrderReceipt>>> = Arc::new(Mutex::new(None));
    {
        let receipt = receipt.clone();
        app.bus().subscribe(Topic::OrderCompleted, move |event| {
            if let ShopEvent::OrderCompleted(r) = event {
                *receipt.lock().unwrap() = Some(r.clone());
            }
        });
    }

    app.bootstrap().await;
    if app.kernel().catalog.products().is_empty() {
        anyhow::bail!("catalog is empty or unavailable at {api_base}");
    }

    for id in &request.items {
        app.dispatch(ShopCommand::AddToBasket(id.clone())).await;
        if !app.kernel().basket.contains(id) {
            anyhow::bail!("product \"{id}\" is unknown or not purchasable");
        }
    }

    app.dispatch(ShopCommand::OpenBasket).await;
    app.dispatch(ShopCommand::BeginCheckout).await;
    for (field, value) in [
        (FormField::Payment, request.payment.as_str().to_string()),
        (FormField::Address, request.address.clone()),
    ] {
        app.dispatch(ShopCommand::SetField { field, value }).await;
    }
    app.dispatch(ShopCommand::AdvanceToContacts).await;
    for (field, value) in [
        (FormField::Email, request.email.clone()),
        (FormField::Phone, request.phone.clone()),
    ] {
        app.dispatch(ShopCommand::SetField { field, value }).await;
    }
    app.dispatch(ShopCommand::SubmitOrder).await;

    let receipt = receipt.lock().unwrap().clone();
    receipt.context("order was not accepted, see the log above")
}
