//! # 移动商城后端 Demo
//!
//! 这个库提供了一个移动电商应用的后端实现，包括：
//! - 购物车聚合：添加/移除商品、批量下单结算
//! - 商品目录：商品和特价商品管理
//! - 支付网关边界：STK 推送发起（沙箱实现）
//! - 分层架构：应用层、核心层、基础设施层

use std::sync::Arc;

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::cart::model::{Cart, CartLineItem, CheckoutSummary, OrderRecord};
pub use app::cart::service::{CartService, CheckoutError};
pub use app::cart::store::{MemoryOrderStore, OrderStore, OrderStoreError};
pub use app::catalog::model::Product;
pub use app::catalog::service::CatalogService;
pub use app::payment::service::{PaymentGateway, SandboxGateway};

/// 应用状态：购物车聚合显式构造后由各处理器共享，
/// 不使用语言级单例
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub cart: CartService,
    pub payments: Arc<dyn PaymentGateway>,
}
