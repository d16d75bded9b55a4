//! 购物车业务服务
//!
//! 结算状态机（单次调用）：Idle -> Submitting -> {Committed, Failed}。
//! Committed 清空购物车并返回成功；Failed 保持购物车原样并返回错误，
//! 调用方凭完整的购物车重新发起结算即可，没有可恢复的中间状态。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use super::model::{Cart, CartLineItem, CheckoutSummary, OrderRecord};
use super::store::{OrderStore, OrderStoreError};
use crate::app::catalog::model::Product;

/// 结算错误类型
#[derive(Debug)]
pub enum CheckoutError {
    /// 批量写入被持久化层拒绝（网络、权限、配额）
    Persistence(OrderStoreError),
    /// 超出调用方配置的结算超时
    TimedOut(Duration),
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutError::Persistence(err) => write!(f, "持久化失败: {}", err),
            CheckoutError::TimedOut(timeout) => {
                write!(f, "结算超时（{}秒）", timeout.as_secs())
            }
        }
    }
}

impl std::error::Error for CheckoutError {}

/// 购物车服务。购物车是显式构造的聚合实例，通过应用状态
/// 传给需要它的各个界面，而不是语言级单例。
#[derive(Clone)]
pub struct CartService {
    cart: Arc<Mutex<Cart>>,
    orders: Arc<dyn OrderStore>,
    checkout_timeout: Duration,
}

impl CartService {
    pub fn new(orders: Arc<dyn OrderStore>, checkout_timeout: Duration) -> Self {
        Self {
            cart: Arc::new(Mutex::new(Cart::new())),
            orders,
            checkout_timeout,
        }
    }

    /// 把商品快照加入购物车，返回新行项的标识。总是成功
    pub fn add_item(&self, product: Product) -> Uuid {
        let mut cart = self.cart.lock().unwrap();
        cart.add_item(product)
    }

    /// 按行项标识移除；不存在时无操作
    pub fn remove_item(&self, line_id: Uuid) {
        let mut cart = self.cart.lock().unwrap();
        cart.remove_item(line_id);
    }

    /// 清空购物车
    pub fn clear(&self) {
        let mut cart = self.cart.lock().unwrap();
        cart.clear();
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        let cart = self.cart.lock().unwrap();
        cart.items().to_vec()
    }

    pub fn len(&self) -> usize {
        let cart = self.cart.lock().unwrap();
        cart.len()
    }

    pub fn is_empty(&self) -> bool {
        let cart = self.cart.lock().unwrap();
        cart.is_empty()
    }

    /// 结算：把当前购物车内容转换为持久订单记录。
    ///
    /// - 行项快照在调用时一次取出，迭代期间不再读购物车
    /// - 每个行项生成一条订单记录，数量为 1，时间戳取当前时刻
    /// - 整批记录一次性提交给存储层，全部写入或全不写入
    /// - 成功后清空购物车；失败（含超时）购物车保持原样，不自动重试
    /// - 空购物车直接短路为成功的无操作，不触达存储层
    pub async fn checkout(&self) -> Result<CheckoutSummary, CheckoutError> {
        let now = chrono::Utc::now().timestamp_millis();

        // 快照当前行项，锁不跨越 await 持有
        let snapshot: Vec<CartLineItem> = {
            let cart = self.cart.lock().unwrap();
            cart.items().to_vec()
        };

        if snapshot.is_empty() {
            info!("购物车为空，结算短路为无操作");
            return Ok(CheckoutSummary {
                orders: 0,
                timestamp_millis: now,
            });
        }

        let records: Vec<OrderRecord> = snapshot
            .iter()
            .map(|item| OrderRecord {
                product_id: item.product.id,
                product_name: item.product.name.clone(),
                quantity: 1,
                timestamp: now,
            })
            .collect();

        // Submitting：整批写入，带调用方配置的超时
        let write = self.orders.write_batch(&records);
        match tokio::time::timeout(self.checkout_timeout, write).await {
            Ok(Ok(())) => {
                // Committed
                let mut cart = self.cart.lock().unwrap();
                cart.clear();
                info!("结算成功，写入 {} 条订单", records.len());
                Ok(CheckoutSummary {
                    orders: records.len(),
                    timestamp_millis: now,
                })
            }
            Ok(Err(err)) => {
                // Failed：购物车保持原样
                warn!("结算失败，购物车未变更: {}", err);
                Err(CheckoutError::Persistence(err))
            }
            Err(_) => {
                warn!(
                    "结算超时（{}秒），购物车未变更",
                    self.checkout_timeout.as_secs()
                );
                Err(CheckoutError::TimedOut(self.checkout_timeout))
            }
        }
    }
}
