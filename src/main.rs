//! 商城后端服务入口

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use duka_api::app::{cart, catalog, payment};
use duka_api::core::middleware::request_logging_middleware;
use duka_api::infrastructure::config::load_config;
use duka_api::infrastructure::logger::Logger;
use duka_api::{AppState, CartService, CatalogService, OrderStore, SandboxGateway};

#[tokio::main]
async fn main() {
    let config = load_config().expect("配置加载失败");
    Logger::init(&config.logging.level);

    info!("启动商城后端服务器...");

    let orders = init_order_store().await;
    let checkout_timeout = Duration::from_secs(config.checkout.timeout_seconds);

    let state = AppState {
        catalog: CatalogService::new(),
        cart: CartService::new(orders, checkout_timeout),
        payments: Arc::new(SandboxGateway::new()),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/products", get(catalog::handler::list_products).post(catalog::handler::create_product))
        .route("/products/:id", get(catalog::handler::get_product))
        .route("/products/:id/image", put(catalog::handler::attach_product_image))
        .route("/offers", get(catalog::handler::list_offers).post(catalog::handler::create_offer))
        .route("/offers/:id/image", put(catalog::handler::attach_offer_image))
        .route("/cart", get(cart::handler::get_cart).delete(cart::handler::clear_cart))
        .route("/cart/items", post(cart::handler::add_cart_item))
        .route("/cart/items/:line_id", delete(cart::handler::remove_cart_item))
        .route("/cart/checkout", post(cart::handler::checkout))
        .route("/payments/stk-push", post(payment::handler::initiate_stk_push))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let listener = TcpListener::bind(addr.as_str())
        .await
        .expect("无法绑定监听地址");

    info!("🚀 商城后端服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products              - 商品列表（支持 user_id/name 过滤）");
    info!("   POST   /products              - 创建商品（图片地址稍后回填）");
    info!("   GET    /products/:id          - 商品详情");
    info!("   PUT    /products/:id/image    - 回填商品图片地址");
    info!("   GET    /offers                - 特价商品列表");
    info!("   POST   /offers                - 创建特价商品");
    info!("   GET    /cart                  - 查看购物车");
    info!("   POST   /cart/items            - 加入购物车");
    info!("   DELETE /cart/items/:line_id   - 移除购物车行项");
    info!("   POST   /cart/checkout         - 结算");
    info!("   POST   /payments/stk-push     - 发起 STK 推送支付");
    info!("   GET    /health                - 健康检查");

    axum::serve(listener, app)
        .await
        .expect("服务器启动失败");
}

/// 健康检查
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 选择订单存储：设置了 DATABASE_URL 时使用 Postgres，
/// 否则退回内存实现
#[cfg(feature = "database")]
async fn init_order_store() -> Arc<dyn OrderStore> {
    use duka_api::app::cart::store::PgOrderStore;
    use duka_api::infrastructure::database::DatabaseManager;
    use duka_api::MemoryOrderStore;

    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let db = DatabaseManager::new(&database_url)
                .await
                .expect("数据库连接失败");
            db.ensure_orders_table()
                .await
                .expect("订单表初始化失败");
            info!("订单存储: Postgres");
            Arc::new(PgOrderStore::new(db.get_pool().clone()))
        }
        Err(_) => {
            info!("未设置 DATABASE_URL，订单存储: 内存");
            MemoryOrderStore::new()
        }
    }
}

#[cfg(not(feature = "database"))]
async fn init_order_store() -> Arc<dyn OrderStore> {
    info!("订单存储: 内存");
    duka_api::MemoryOrderStore::new()
}
