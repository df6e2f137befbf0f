pub mod app;
pub mod app_core;
pub mod domain;
pub mod gateway;
pub mod kernel;
pub mod ports;
pub mod viewmodel;

pub use app::ShopApplication;
pub use app_core::*;
pub use domain::CheckoutStage;
pub use gateway::HttpOrderGateway;
pub use kernel::ShopKernel;
pub use ports::*;
pub use viewmodel::*;
