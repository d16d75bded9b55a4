use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use duka_api::{
    CartService, CheckoutError, MemoryOrderStore, OrderRecord, OrderStore, OrderStoreError,
    Product,
};

fn product(name: &str, price: f64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{} 的描述", name),
        price,
        image_url: String::new(),
        user_id: "user-1".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn cart_service(store: Arc<dyn OrderStore>) -> CartService {
    CartService::new(store, Duration::from_secs(5))
}

/// 总是失败的订单存储，模拟持久化层拒绝批量写入
struct FailingOrderStore;

#[async_trait]
impl OrderStore for FailingOrderStore {
    async fn write_batch(&self, _records: &[OrderRecord]) -> Result<(), OrderStoreError> {
        Err(OrderStoreError::Unavailable("connection refused".to_string()))
    }
}

/// 写入前长时间挂起的订单存储，用于触发结算超时
struct SlowOrderStore {
    orders: Mutex<Vec<OrderRecord>>,
    delay: Duration,
}

#[async_trait]
impl OrderStore for SlowOrderStore {
    async fn write_batch(&self, records: &[OrderRecord]) -> Result<(), OrderStoreError> {
        tokio::time::sleep(self.delay).await;
        self.orders.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}

#[test]
fn test_add_items_preserves_insertion_order() {
    let cart = cart_service(MemoryOrderStore::new());

    for i in 0..5 {
        cart.add_item(product(&format!("p{}", i), 1.0 + i as f64));
    }

    assert_eq!(cart.len(), 5);
    let names: Vec<String> = cart
        .items()
        .iter()
        .map(|item| item.product.name.clone())
        .collect();
    assert_eq!(names, vec!["p0", "p1", "p2", "p3", "p4"]);
}

#[test]
fn test_remove_unknown_line_is_noop() {
    let cart = cart_service(MemoryOrderStore::new());
    cart.add_item(product("a", 10.0));

    let before = cart.items();
    cart.remove_item(Uuid::new_v4());

    assert_eq!(cart.items(), before);
}

#[test]
fn test_readding_equal_product_stays_distinct() {
    let cart = cart_service(MemoryOrderStore::new());
    let p = product("a", 10.0);

    let first = cart.add_item(p.clone());
    cart.remove_item(first);
    let second = cart.add_item(p.clone());
    let third = cart.add_item(p);

    // 两个相同商品的行项各自独立，不合并
    assert_eq!(cart.len(), 2);
    assert_ne!(second, third);
}

#[test]
fn test_clear_empties_cart() {
    let cart = cart_service(MemoryOrderStore::new());
    cart.add_item(product("a", 1.0));
    cart.add_item(product("b", 2.0));

    cart.clear();

    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_checkout_empty_cart_is_noop() {
    let store = MemoryOrderStore::new();
    let cart = cart_service(store.clone());

    let summary = cart.checkout().await.unwrap();

    assert_eq!(summary.orders, 0);
    // 短路：存储层未被触达
    assert!(store.orders().is_empty());
}

#[tokio::test]
async fn test_checkout_success_writes_one_order_per_line() {
    let store = MemoryOrderStore::new();
    let cart = cart_service(store.clone());

    let a = product("a", 10.0);
    let b = product("b", 20.0);
    cart.add_item(a.clone());
    cart.add_item(b.clone());
    cart.add_item(a.clone());

    let before = chrono::Utc::now().timestamp_millis();
    let summary = cart.checkout().await.unwrap();

    // 成功：购物车清空，每个行项一条记录
    assert_eq!(summary.orders, 3);
    assert!(cart.is_empty());

    let orders = store.orders();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].product_id, a.id);
    assert_eq!(orders[1].product_id, b.id);
    assert_eq!(orders[2].product_id, a.id);
    for order in &orders {
        assert_eq!(order.quantity, 1);
        assert!(order.timestamp >= before);
    }
}

#[tokio::test]
async fn test_checkout_failure_leaves_cart_intact() {
    let cart = cart_service(Arc::new(FailingOrderStore));

    cart.add_item(product("a", 10.0));
    cart.add_item(product("b", 20.0));
    let before = cart.items();

    let err = cart.checkout().await.unwrap_err();

    assert!(matches!(err, CheckoutError::Persistence(_)));
    assert_eq!(cart.items(), before);
}

/// 容量受限的订单存储：整批超出配额时一条都不写
struct QuotaOrderStore {
    orders: Mutex<Vec<OrderRecord>>,
    capacity: usize,
}

#[async_trait]
impl OrderStore for QuotaOrderStore {
    async fn write_batch(&self, records: &[OrderRecord]) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.lock().unwrap();
        if orders.len() + records.len() > self.capacity {
            return Err(OrderStoreError::QuotaExceeded(format!(
                "capacity {}",
                self.capacity
            )));
        }
        orders.extend_from_slice(records);
        Ok(())
    }
}

#[tokio::test]
async fn test_checkout_failure_writes_no_partial_orders() {
    let store = Arc::new(QuotaOrderStore {
        orders: Mutex::new(Vec::new()),
        capacity: 2,
    });
    let cart = CartService::new(store.clone(), Duration::from_secs(5));

    cart.add_item(product("a", 10.0));
    cart.add_item(product("b", 20.0));
    cart.add_item(product("c", 30.0));

    let err = cart.checkout().await.unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Persistence(OrderStoreError::QuotaExceeded(_))
    ));

    // 全有或全无：失败时一条订单也不存在
    assert!(store.orders.lock().unwrap().is_empty());
    assert_eq!(cart.len(), 3);
}

#[tokio::test]
async fn test_checkout_timeout_counts_as_failure() {
    let store = Arc::new(SlowOrderStore {
        orders: Mutex::new(Vec::new()),
        delay: Duration::from_secs(5),
    });
    let cart = CartService::new(store.clone(), Duration::from_millis(50));

    cart.add_item(product("a", 10.0));
    let err = cart.checkout().await.unwrap_err();

    assert!(matches!(err, CheckoutError::TimedOut(_)));
    assert_eq!(cart.len(), 1);
    assert!(store.orders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_scenario_duplicate_removal_keeps_relative_order() {
    let cart = cart_service(MemoryOrderStore::new());

    let a = product("A", 10.0);
    let b = product("B", 20.0);
    let first_a = cart.add_item(a.clone());
    cart.add_item(b.clone());
    cart.add_item(a.clone());
    assert_eq!(cart.len(), 3);

    // 删除第一个 A 行项，剩余 {B, A} 保持原相对顺序
    cart.remove_item(first_a);

    assert_eq!(cart.len(), 2);
    let names: Vec<String> = cart
        .items()
        .iter()
        .map(|item| item.product.name.clone())
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[tokio::test]
async fn test_failed_checkout_can_be_retried() {
    // 第一次失败后换用可用存储重试，购物车内容完整保留
    let cart = cart_service(Arc::new(FailingOrderStore));
    cart.add_item(product("a", 10.0));
    cart.add_item(product("b", 20.0));

    assert!(cart.checkout().await.is_err());
    assert_eq!(cart.len(), 2);

    // 同一购物车再次结算（存储恢复的场景用内存实现模拟）
    let store = MemoryOrderStore::new();
    let retry_cart = cart_service(store.clone());
    for item in cart.items() {
        retry_cart.add_item(item.product.clone());
    }

    let summary = retry_cart.checkout().await.unwrap();
    assert_eq!(summary.orders, 2);
    assert!(retry_cart.is_empty());
    assert_eq!(store.orders().len(), 2);
}
