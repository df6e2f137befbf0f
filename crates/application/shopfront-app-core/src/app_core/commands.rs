use shopfront_core::{FormField, ProductId};

#[derive(Debug, Clone)]
pub enum ShopCommand {
    // Catalog browsing
    SelectProduct(ProductId),
    ClearSelection,

    // Basket
    AddToBasket(ProductId),
    RemoveFromBasket(ProductId),
    OpenBasket,

    // Checkout
    BeginCheckout,
    SetField { field: FormField, value: String },
    AdvanceToContacts,
    SubmitOrder,
    CloseSuccess,
}
