/// Stages of the checkout funnel. The kernel gates every forward transition:
/// `BasketReview → Shipping` needs a non-empty basket, `Shipping → Contacts`
/// needs payment and address, submission needs a fully valid buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Browsing,
    BasketReview,
    Shipping,
    Contacts,
    Completed,
}
