use std::sync::{Arc, Mutex};

use shopfront_app_core::{BasketStore, BuyerStore, CatalogStore, EventBus, ShopEvent, Topic};
use shopfront_core::{FormField, Product};

fn product(id: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Товар {id}"),
        description: String::new(),
        image: String::new(),
        category: String::new(),
        price,
    }
}

fn record_topic(bus: &EventBus, topic: Topic) -> Arc<Mutex<Vec<ShopEvent>>> {
    let log: Arc<Mutex<Vec<ShopEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    bus.subscribe(topic, move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    log
}

#[test]
fn set_products_publishes_the_new_list() {
    let bus = EventBus::new();
    let store = CatalogStore::new(bus.clone());
    let log = record_topic(&bus, Topic::CatalogChanged);

    store.set_products(vec![product("1", Some(100)), product("2", None)]);

    let events = log.lock().unwrap();
    match events.as_slice() {
        [ShopEvent::CatalogChanged(products)] => assert_eq!(products.len(), 2),
        other => panic!("expected one CatalogChanged, got {other:?}"),
    }
}

#[test]
fn catalog_getters_hand_out_independent_copies() {
    let bus = EventBus::new();
    let store = CatalogStore::new(bus);
    store.set_products(vec![product("1", Some(100))]);

    let mut copy = store.products();
    copy[0].title = "mutated".to_string();
    copy.clear();

    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].title, "Товар 1");
}

#[test]
fn select_publishes_the_product_and_missing_ids_publish_nothing() {
    let bus = EventBus::new();
    let store = CatalogStore::new(bus.clone());
    store.set_products(vec![product("1", Some(100))]);
    let log = record_topic(&bus, Topic::ProductSelected);

    store.select("1").unwrap();
    store.select("missing").unwrap_err();

    let events = log.lock().unwrap();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ShopEvent::ProductSelected(p) => assert_eq!(p.id, "1"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn basket_publishes_items_and_total_on_every_change() {
    let bus = EventBus::new();
    let store = BasketStore::new(bus.clone());
    let log = record_topic(&bus, Topic::BasketChanged);

    assert!(store.add(product("1", Some(100))));
    assert!(store.add(product("2", Some(200))));
    // duplicate: no state change, no event
    assert!(!store.add(product("1", Some(100))));
    // removal of an absent id still publishes the (unchanged) state
    assert!(!store.remove_by_id("999"));
    store.clear();

    let events = log.lock().unwrap();
    let totals: Vec<u64> = events
        .iter()
        .map(|e| match e {
            ShopEvent::BasketChanged { total, .. } => *total,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(totals, vec![100, 300, 300, 0]);
}

#[test]
fn basket_event_payload_is_a_defensive_copy() {
    let bus = EventBus::new();
    let store = BasketStore::new(bus.clone());

    let captured: Arc<Mutex<Vec<Product>>> = Arc::new(Mutex::new(Vec::new()));
    {
        let captured = captured.clone();
        bus.subscribe(Topic::BasketChanged, move |event| {
            if let ShopEvent::BasketChanged { items, .. } = event {
                *captured.lock().unwrap() = items.clone();
            }
        });
    }

    store.add(product("1", Some(100)));
    captured.lock().unwrap()[0].title = "mutated".to_string();

    assert_eq!(store.items()[0].title, "Товар 1");
}

#[test]
fn buyer_mutations_publish_update_then_fresh_errors() {
    let bus = EventBus::new();
    let store = BuyerStore::new(bus.clone());

    let order: Arc<Mutex<Vec<Topic>>> = Arc::new(Mutex::new(Vec::new()));
    for topic in [Topic::BuyerUpdated, Topic::FormErrors, Topic::FormCleared] {
        let order = order.clone();
        bus.subscribe(topic, move |event| {
            order.lock().unwrap().push(event.topic());
        });
    }

    store.set_field(FormField::Email, "a@b.com").unwrap();
    store.clear();

    assert_eq!(
        *order.lock().unwrap(),
        vec![
            Topic::BuyerUpdated,
            Topic::FormErrors,
            Topic::FormCleared,
            Topic::FormErrors,
        ]
    );
}

#[test]
fn buyer_errors_shrink_as_fields_fill_in() {
    let bus = EventBus::new();
    let store = BuyerStore::new(bus);

    assert!(!store.is_valid());
    store.set_field(FormField::Payment, "card").unwrap();
    store.set_field(FormField::Email, "a@b.com").unwrap();
    store.set_field(FormField::Phone, "+1").unwrap();
    assert!(!store.is_valid());

    store.set_field(FormField::Address, "x").unwrap();
    assert!(store.is_valid());
    assert!(store.validate().is_empty());
}
