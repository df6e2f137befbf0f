use std::sync::{Arc, Mutex};

use tracing::{debug, error, warn};

use crate::app_core::{BasketStore, BuyerStore, CatalogStore, EventBus, ShopCommand, ShopEvent};
use crate::domain::CheckoutStage;
use crate::ports::OrderGateway;
use shopfront_core::OrderDraft;

/// Interprets [`ShopCommand`]s against the three stores, gates the checkout
/// funnel, and talks to the backend through the [`OrderGateway`] port.
///
/// Checkout is single-flight by construction: `dispatch` is awaited per
/// command, and the stage lock is never held across an await or a bus
/// dispatch.
pub struct ShopKernel<G> {
    pub catalog: CatalogStore,
    pub basket: BasketStore,
    pub buyer: BuyerStore,
    gateway: Arc<G>,
    bus: EventBus,
    stage: Mutex<CheckoutStage>,
}

impl<G: OrderGateway> ShopKernel<G> {
    pub fn new(bus: EventBus, gateway: Arc<G>) -> Self {
        Self {
            catalog: CatalogStore::new(bus.clone()),
            basket: BasketStore::new(bus.clone()),
            buyer: BuyerStore::new(bus.clone()),
            gateway,
            bus,
            stage: Mutex::new(CheckoutStage::Browsing),
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn stage(&self) -> CheckoutStage {
        *self.stage.lock().unwrap()
    }

    fn enter_stage(&self, stage: CheckoutStage) {
        {
            *self.stage.lock().unwrap() = stage;
        }
        self.bus.publish(ShopEvent::StageChanged(stage));
    }

    /// Loads the catalog through the gateway. A transport failure is logged
    /// and leaves the catalog empty; there is no retry.
    pub async fn load_catalog(&self) {
        match self.gateway.fetch_catalog().await {
            Ok(products) => self.catalog.set_products(products),
            Err(e) => error!("Failed to load catalog: {e:#}"),
        }
    }

    pub async fn dispatch(&self, cmd: ShopCommand) {
        match cmd {
            ShopCommand::SelectProduct(id) => {
                if let Err(e) = self.catalog.select(&id) {
                    warn!("{e}");
                }
            }

            ShopCommand::ClearSelection => self.catalog.clear_selection(),

            ShopCommand::AddToBasket(id) => match self.catalog.product(&id) {
                None => warn!(id = %id, "cannot add an unknown product to the basket"),
                Some(product) if !product.is_purchasable() => {
                    debug!(id = %id, "priceless product stays out of the basket");
                }
                Some(product) => {
                    if !self.basket.add(product) {
                        debug!(id = %id, "product is already in the basket");
                    }
                }
            },

            ShopCommand::RemoveFromBasket(id) => {
                self.basket.remove_by_id(&id);
            }

            ShopCommand::OpenBasket => self.enter_stage(CheckoutStage::BasketReview),

            ShopCommand::BeginCheckout => {
                if self.basket.is_empty() {
                    warn!("checkout needs a non-empty basket");
                    return;
                }
                self.buyer.clear();
                self.enter_stage(CheckoutStage::Shipping);
            }

            ShopCommand::SetField { field, value } => {
                if let Err(e) = self.buyer.set_field(field, &value) {
                    warn!("{e}");
                }
            }

            ShopCommand::AdvanceToContacts => {
                if self.stage() != CheckoutStage::Shipping {
                    warn!(stage = ?self.stage(), "contacts form is only reachable from shipping");
                    return;
                }
                let errors = self.buyer.validate();
                if errors.shipping_complete() {
                    self.enter_stage(CheckoutStage::Contacts);
                } else {
                    self.bus.publish(ShopEvent::FormErrors(errors));
                }
            }

            ShopCommand::SubmitOrder => self.submit_order().await,

            ShopCommand::CloseSuccess => {
                self.basket.clear();
                self.enter_stage(CheckoutStage::Browsing);
            }
        }
    }

    async fn submit_order(&self) {
        if self.stage() != CheckoutStage::Contacts {
            warn!(stage = ?self.stage(), "submission is only reachable from the contacts form");
            return;
        }

        let errors = self.buyer.validate();
        if !errors.is_empty() {
            self.bus.publish(ShopEvent::FormErrors(errors));
            return;
        }

        let draft = match self
            .buyer
            .with(|buyer| self.basket.with(|basket| OrderDraft::compose(buyer, basket)))
        {
            Ok(draft) => draft,
            Err(e) => {
                error!("{e}");
                return;
            }
        };

        match self.gateway.submit_order(&draft).await {
            Ok(receipt) => {
                self.basket.clear();
                self.buyer.clear();
                self.bus.publish(ShopEvent::OrderCompleted(receipt));
                self.enter_stage(CheckoutStage::Completed);
            }
            // Basket and buyer stay intact so the user can retry.
            Err(e) => error!("Failed to submit order: {e:#}"),
        }
    }
}
