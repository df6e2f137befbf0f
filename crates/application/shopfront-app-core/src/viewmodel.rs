use shopfront_core::Product;

/// Price label the way the store renders it: a synapse amount, or
/// "Бесценно" for priceless products.
pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{value} синапсов"),
        None => "Бесценно".to_string(),
    }
}

pub fn format_total(total: u64) -> String {
    format!("{total} синапсов")
}

#[derive(Debug, Clone)]
pub struct BasketLineVm {
    /// 1-based position in the basket listing.
    pub index: usize,
    pub title: String,
    pub price_label: String,
}

pub fn basket_lines(items: &[Product]) -> Vec<BasketLineVm> {
    items
        .iter()
        .enumerate()
        .map(|(ix, item)| BasketLineVm {
            index: ix + 1,
            title: item.title.clone(),
            price_label: format_price(item.price),
        })
        .collect()
}
