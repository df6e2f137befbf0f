use std::sync::Arc;

use crate::app_core::{EventBus, ShopCommand, ShopEvent, Topic};
use crate::kernel::ShopKernel;
use crate::ports::{OrderGateway, ShopView};

/// Explicitly wired application: bus, stores, kernel, and the view bindings
/// that turn domain events into view updates. Collaborators come in through
/// the constructor; there are no process-wide singletons.
pub struct ShopApplication<G> {
    bus: EventBus,
    kernel: Arc<ShopKernel<G>>,
    view: Arc<dyn ShopView>,
}

impl<G: OrderGateway> ShopApplication<G> {
    pub fn new(gateway: G, view: Arc<dyn ShopView>) -> Self {
        let bus = EventBus::new();
        let kernel = Arc::new(ShopKernel::new(bus.clone(), Arc::new(gateway)));
        let app = Self { bus, kernel, view };
        app.bind_catalog();
        app.bind_basket();
        app.bind_checkout();
        app
    }

    pub fn kernel(&self) -> &Arc<ShopKernel<G>> {
        &self.kernel
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Loads the catalog; the resulting `CatalogChanged` event re-renders
    /// the gallery through the bindings below.
    pub async fn bootstrap(&self) {
        self.kernel.load_catalog().await;
    }

    pub async fn dispatch(&self, cmd: ShopCommand) {
        self.kernel.dispatch(cmd).await;
    }

    fn bind_catalog(&self) {
        let view = self.view.clone();
        self.bus.subscribe(Topic::CatalogChanged, move |event| {
            if let ShopEvent::CatalogChanged(products) = event {
                view.render_catalog(products);
            }
        });

        // The preview needs to know whether the product is already in the
        // basket to flip its add/remove action.
        let view = self.view.clone();
        let basket = self.kernel.basket.clone();
        self.bus.subscribe(Topic::ProductSelected, move |event| {
            if let ShopEvent::ProductSelected(product) = event {
                view.show_preview(product, basket.contains(&product.id));
            }
        });
    }

    fn bind_basket(&self) {
        let view = self.view.clone();
        self.bus.subscribe(Topic::BasketChanged, move |event| {
            if let ShopEvent::BasketChanged { items, total } = event {
                view.render_basket(items, *total);
                view.set_basket_count(items.len());
            }
        });
    }

    fn bind_checkout(&self) {
        let view = self.view.clone();
        self.bus.subscribe(Topic::FormErrors, move |event| {
            if let ShopEvent::FormErrors(errors) = event {
                view.show_validation(errors);
            }
        });

        let view = self.view.clone();
        let buyer = self.kernel.buyer.clone();
        self.bus.subscribe(Topic::StageChanged, move |event| {
            if let ShopEvent::StageChanged(stage) = event {
                view.show_stage(*stage, &buyer.data());
            }
        });

        let view = self.view.clone();
        self.bus.subscribe(Topic::OrderCompleted, move |event| {
            if let ShopEvent::OrderCompleted(receipt) = event {
                view.show_success(receipt);
            }
        });
    }
}
