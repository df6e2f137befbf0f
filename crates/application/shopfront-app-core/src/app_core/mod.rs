pub mod bus;
pub mod commands;
pub mod events;
pub mod stores;

pub use bus::{EventBus, Subscription};
pub use commands::ShopCommand;
pub use events::{ShopEvent, Topic};
pub use stores::{BasketStore, BuyerStore, CatalogStore};
