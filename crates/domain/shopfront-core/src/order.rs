use serde::{Deserialize, Serialize};

use crate::buyer::{validate, Buyer, FormField, PaymentMethod};
use crate::{Basket, ProductId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("buyer details are incomplete, missing fields: {0:?}")]
    IncompleteBuyer(Vec<FormField>),
    #[error("cannot compose an order from an empty basket")]
    EmptyBasket,
}

/// One-shot DTO sent to the order endpoint. Composed from a complete buyer
/// and a non-empty basket; never built by coercing missing fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderDraft {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<ProductId>,
}

impl OrderDraft {
    /// Precondition-checked composition: fails when any buyer field is
    /// missing or the basket is empty, leaving coercion to nobody.
    pub fn compose(buyer: &Buyer, basket: &Basket) -> Result<Self, OrderError> {
        let info = buyer.data();
        let errors = validate(&info);
        let payment = match info.payment {
            Some(p) if errors.is_empty() => p,
            _ => return Err(OrderError::IncompleteBuyer(errors.missing_fields())),
        };
        if basket.is_empty() {
            return Err(OrderError::EmptyBasket);
        }

        Ok(Self {
            payment,
            email: info.email,
            phone: info.phone,
            address: info.address,
            total: basket.total(),
            items: basket.items().iter().map(|item| item.id.clone()).collect(),
        })
    }
}

/// Server confirmation for a submitted order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub id: String,
    pub total: u64,
}
