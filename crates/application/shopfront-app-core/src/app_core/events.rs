use crate::domain::CheckoutStage;
use shopfront_core::{BuyerInfo, OrderReceipt, Product, ValidationErrors};

/// Subscription keys for the bus. Exact-match only; one topic per event
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    CatalogChanged,
    ProductSelected,
    BasketChanged,
    BuyerUpdated,
    FormErrors,
    FormCleared,
    StageChanged,
    OrderCompleted,
}

#[derive(Debug, Clone)]
pub enum ShopEvent {
    /// The catalog was replaced; carries a copy of the new list.
    CatalogChanged(Vec<Product>),
    ProductSelected(Product),
    /// Any basket mutation; carries the current items and total.
    BasketChanged { items: Vec<Product>, total: u64 },
    BuyerUpdated(BuyerInfo),
    /// Freshly computed validation state, published after every buyer change.
    FormErrors(ValidationErrors),
    FormCleared(BuyerInfo),
    StageChanged(CheckoutStage),
    OrderCompleted(OrderReceipt),
}

impl ShopEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ShopEvent::CatalogChanged(_) => Topic::CatalogChanged,
            ShopEvent::ProductSelected(_) => Topic::ProductSelected,
            ShopEvent::BasketChanged { .. } => Topic::BasketChanged,
            ShopEvent::BuyerUpdated(_) => Topic::BuyerUpdated,
            ShopEvent::FormErrors(_) => Topic::FormErrors,
            ShopEvent::FormCleared(_) => Topic::FormCleared,
            ShopEvent::StageChanged(_) => Topic::StageChanged,
            ShopEvent::OrderCompleted(_) => Topic::OrderCompleted,
        }
    }
}
