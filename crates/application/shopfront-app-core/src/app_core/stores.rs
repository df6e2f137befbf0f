use std::sync::{Arc, Mutex};

use shopfront_core::{
    Basket, Buyer, BuyerError, BuyerInfo, BuyerPatch, CatalogError, FormField, Product,
    ProductCatalog, ValidationErrors,
};

use super::bus::EventBus;
use super::events::ShopEvent;

// Stores wrap the domain models with a bus handle and follow "mutate, then
// emit": the model lock is always released before the bus runs handlers.
// Every accessor and every event payload is a defensive copy.

#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<Mutex<ProductCatalog>>,
    bus: EventBus,
}

impl CatalogStore {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ProductCatalog::new())),
            bus,
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        let snapshot = {
            let mut catalog = self.inner.lock().unwrap();
            catalog.set_products(products);
            catalog.products().to_vec()
        };
        self.bus.publish(ShopEvent::CatalogChanged(snapshot));
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.lock().unwrap().products().to_vec()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.inner.lock().unwrap().product(id).cloned()
    }

    pub fn select(&self, id: &str) -> Result<Product, CatalogError> {
        let product = {
            let mut catalog = self.inner.lock().unwrap();
            catalog.select(id)?.clone()
        };
        self.bus
            .publish(ShopEvent::ProductSelected(product.clone()));
        Ok(product)
    }

    pub fn selected(&self) -> Option<Product> {
        self.inner.lock().unwrap().selected().cloned()
    }

    pub fn clear_selection(&self) {
        self.inner.lock().unwrap().clear_selection();
    }

    pub fn has_selection(&self) -> bool {
        self.inner.lock().unwrap().has_selection()
    }
}

#[derive(Clone)]
pub struct BasketStore {
    inner: Arc<Mutex<Basket>>,
    bus: EventBus,
}

impl BasketStore {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Basket::new())),
            bus,
        }
    }

    /// Appends the product unless its id is already present; publishes only
    /// when the basket actually changed.
    pub fn add(&self, product: Product) -> bool {
        let changed = {
            let mut basket = self.inner.lock().unwrap();
            if basket.add(product) {
                Some((basket.items().to_vec(), basket.total()))
            } else {
                None
            }
        };
        match changed {
            Some((items, total)) => {
                self.bus.publish(ShopEvent::BasketChanged { items, total });
                true
            }
            None => false,
        }
    }

    /// Removes every item matching `id` and publishes the new state whether
    /// or not anything was removed.
    pub fn remove_by_id(&self, id: &str) -> bool {
        let (found, items, total) = {
            let mut basket = self.inner.lock().unwrap();
            let found = basket.remove_by_id(id);
            (found, basket.items().to_vec(), basket.total())
        };
        self.bus.publish(ShopEvent::BasketChanged { items, total });
        found
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().contains(id)
    }

    pub fn items(&self) -> Vec<Product> {
        self.inner.lock().unwrap().items().to_vec()
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    pub fn total(&self) -> u64 {
        self.inner.lock().unwrap().total()
    }

    pub fn clear(&self) {
        let (items, total) = {
            let mut basket = self.inner.lock().unwrap();
            basket.clear();
            (Vec::new(), basket.total())
        };
        self.bus.publish(ShopEvent::BasketChanged { items, total });
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&Basket) -> R) -> R {
        f(&self.inner.lock().unwrap())
    }
}

#[derive(Clone)]
pub struct BuyerStore {
    inner: Arc<Mutex<Buyer>>,
    bus: EventBus,
}

impl BuyerStore {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Buyer::new())),
            bus,
        }
    }

    /// Merges the patch, then publishes the updated data and the freshly
    /// computed error set.
    pub fn update(&self, patch: BuyerPatch) {
        let (info, errors) = {
            let mut buyer = self.inner.lock().unwrap();
            buyer.update(patch);
            (buyer.data(), buyer.validate())
        };
        self.bus.publish(ShopEvent::BuyerUpdated(info));
        self.bus.publish(ShopEvent::FormErrors(errors));
    }

    pub fn set_field(&self, field: FormField, value: &str) -> Result<(), BuyerError> {
        let (info, errors) = {
            let mut buyer = self.inner.lock().unwrap();
            buyer.set_field(field, value)?;
            (buyer.data(), buyer.validate())
        };
        self.bus.publish(ShopEvent::BuyerUpdated(info));
        self.bus.publish(ShopEvent::FormErrors(errors));
        Ok(())
    }

    pub fn field(&self, field: FormField) -> String {
        self.inner.lock().unwrap().field(field)
    }

    pub fn data(&self) -> BuyerInfo {
        self.inner.lock().unwrap().data()
    }

    pub fn clear(&self) {
        let (info, errors) = {
            let mut buyer = self.inner.lock().unwrap();
            buyer.clear();
            (buyer.data(), buyer.validate())
        };
        self.bus.publish(ShopEvent::FormCleared(info));
        self.bus.publish(ShopEvent::FormErrors(errors));
    }

    pub fn validate(&self) -> ValidationErrors {
        self.inner.lock().unwrap().validate()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.lock().unwrap().is_valid()
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&Buyer) -> R) -> R {
        f(&self.inner.lock().unwrap())
    }
}
