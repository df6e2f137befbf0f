use serde::{Deserialize, Serialize};

pub mod basket;
pub mod buyer;
pub mod catalog;
pub mod order;

pub type ProductId = String;

/// A single catalog entry as delivered by the store backend.
///
/// `price == None` marks a priceless product: it can be browsed but never
/// bought, and it contributes 0 to any total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: Option<u64>,
}

impl Product {
    pub fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

pub use basket::Basket;
pub use buyer::{
    Buyer, BuyerError, BuyerInfo, BuyerPatch, FormField, PaymentMethod, ValidationErrors,
};
pub use catalog::{CatalogError, ProductCatalog};
pub use order::{OrderDraft, OrderError, OrderReceipt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_a_null_price_as_priceless() {
        let json = r#"{
            "id": "1",
            "title": "Товар 1",
            "description": "",
            "image": "1.svg",
            "category": "другое",
            "price": null
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, None);
        assert!(!product.is_purchasable());
    }
}
