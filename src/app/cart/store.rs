//! 订单持久化边界
//!
//! 购物车聚合唯一的外部接口：向 "orders" 集合批量创建文档，
//! 要么全部写入要么全不写入。聚合从不读回订单。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::model::OrderRecord;

/// 订单存储错误类型
#[derive(Debug, Clone)]
pub enum OrderStoreError {
    /// 网络或服务不可达
    Unavailable(String),
    /// 权限不足
    PermissionDenied(String),
    /// 配额用尽
    QuotaExceeded(String),
}

impl std::fmt::Display for OrderStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStoreError::Unavailable(msg) => write!(f, "存储不可用: {}", msg),
            OrderStoreError::PermissionDenied(msg) => write!(f, "权限不足: {}", msg),
            OrderStoreError::QuotaExceeded(msg) => write!(f, "配额用尽: {}", msg),
        }
    }
}

impl std::error::Error for OrderStoreError {}

/// 订单存储接口。`write_batch` 必须是原子的：
/// 一次结算的所有订单记录要么全部落盘，要么一条都不写。
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn write_batch(&self, records: &[OrderRecord]) -> Result<(), OrderStoreError>;
}

/// 内存订单存储（开发 / 测试用）。单把锁下整批插入，天然原子
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<OrderRecord>>,
}

impl MemoryOrderStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 读取当前全部订单（仅供测试断言使用）
    pub fn orders(&self) -> Vec<OrderRecord> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn write_batch(&self, records: &[OrderRecord]) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.lock().unwrap();
        orders.extend_from_slice(records);
        Ok(())
    }
}

/// Postgres 订单存储。整批记录放在一个事务里提交，
/// 原子性由数据库保证
#[cfg(feature = "database")]
pub struct PgOrderStore {
    pool: sqlx::PgPool,
}

#[cfg(feature = "database")]
impl PgOrderStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[cfg(feature = "database")]
#[async_trait]
impl OrderStore for PgOrderStore {
    async fn write_batch(&self, records: &[OrderRecord]) -> Result<(), OrderStoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        for record in records {
            sqlx::query(
                "INSERT INTO orders (product_id, product_name, quantity, timestamp) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(record.product_id)
            .bind(&record.product_name)
            .bind(record.quantity as i32)
            .bind(record.timestamp)
            .execute(&mut *tx)
            .await
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| OrderStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
