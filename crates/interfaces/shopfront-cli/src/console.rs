use tracing::{debug, info};

use shopfront_app_core::{basket_lines, format_total, CheckoutStage, ShopView};
use shopfront_core::{BuyerInfo, OrderReceipt, Product, ValidationErrors};

/// Terminal rendition of the view port. Basket contents and the final
/// receipt go to stdout; the rest is log noise.
#[derive(Default)]
pub struct ConsoleView;

impl ShopView for ConsoleView {
    fn render_catalog(&self, products: &[Product]) {
        debug!(count = products.len(), "catalog rendered");
    }

    fn show_preview(&self, product: &Product, in_basket: bool) {
        info!(id = %product.id, title = %product.title, in_basket, "product preview");
    }

    fn render_basket(&self, items: &[Product], total: u64) {
        for line in basket_lines(items) {
            println!("{:>3}. {:<40} {}", line.index, line.title, line.price_label);
        }
        println!("     Итого: {}", format_total(total));
    }

    fn set_basket_count(&self, count: usize) {
        debug!(count, "basket counter updated");
    }

    fn show_validation(&self, errors: &ValidationErrors) {
        for (field, message) in errors.messages() {
            debug!(field = %field, "{message}");
        }
    }

    fn show_stage(&self, stage: CheckoutStage, _buyer: &BuyerInfo) {
        info!(?stage, "checkout stage");
    }

    fn show_success(&self, receipt: &OrderReceipt) {
        println!("Заказ {} оформлен, списано {}", receipt.id, format_total(receipt.total));
    }
}
