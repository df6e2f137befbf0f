use axum::{
    body::Body,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use shopfront_cli::commands::{self, CheckoutRequest};
use shopfront_core::PaymentMethod;

const CATALOG_BODY: &str = r#"{
  "total": 3,
  "items": [
    { "id": "p-1", "title": "Бэкенд-антистресс", "description": "", "image": "1.svg", "category": "софт-скил", "price": 100 },
    { "id": "p-2", "title": "Фреймворк куки судьбы", "description": "", "image": "2.svg", "category": "дополнительное", "price": 200 },
    { "id": "p-free", "title": "Мамка-таймер", "description": "", "image": "3.svg", "category": "кнопка", "price": null }
  ]
}"#;

async fn start_mock_server() -> (SocketAddr, Arc<Mutex<Option<String>>>) {
    let received_order: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

    let app = Router::new()
        .route(
            "/api/shop/product",
            get(|| async { Body::from(CATALOG_BODY) }),
        )
        .route(
            "/api/shop/order",
            post({
                let received_order = received_order.clone();
                move |body: String| async move {
                    let total = serde_json::from_str::<serde_json::Value>(&body)
                        .ok()
                        .and_then(|v| v["total"].as_u64())
                        .unwrap_or(0);
                    *received_order.lock().unwrap() = Some(body);
                    Body::from(format!(r#"{{ "id": "order-77", "total": {total} }}"#))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received_order)
}

fn request(items: &[&str]) -> CheckoutRequest {
    CheckoutRequest {
        items: items.iter().map(|s| s.to_string()).collect(),
        payment: PaymentMethod::Card,
        email: "a@b.com".to_string(),
        phone: "+1".to_string(),
        address: "Спб, ул. Пример, 1".to_string(),
    }
}

#[tokio::test]
async fn scripted_checkout_returns_the_receipt() {
    let (addr, received) = start_mock_server().await;
    let api_base = format!("http://{addr}/api/shop");

    let products = commands::cmd_catalog(&api_base).await.unwrap();
    assert_eq!(products.len(), 3);

    let receipt = commands::cmd_order(&api_base, request(&["p-1", "p-2"]))
        .await
        .unwrap();
    assert_eq!(receipt.id, "order-77");
    assert_eq!(receipt.total, 300);

    let body = received.lock().unwrap().clone().expect("order was posted");
    let posted: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(posted["items"], serde_json::json!(["p-1", "p-2"]));
    assert_eq!(posted["payment"], "card");
    assert_eq!(posted["email"], "a@b.com");
}

#[tokio::test]
async fn unknown_and_priceless_items_abort_the_checkout() {
    let (addr, received) = start_mock_server().await;
    let api_base = format!("http://{addr}/api/shop");

    let err = commands::cmd_order(&api_base, request(&["nope"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("nope"));

    let err = commands::cmd_order(&api_base, request(&["p-free"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("p-free"));

    assert!(received.lock().unwrap().is_none());
}

#[tokio::test]
async fn unreachable_backend_fails_the_catalog_command() {
    // nothing listens on this port
    let err = commands::cmd_catalog("http://127.0.0.1:9/api/shop")
        .await
        .unwrap_err();
    assert!(!err.to_string().is_empty());
}
