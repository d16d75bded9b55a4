//! 支付数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 支付状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Failed,
}

/// 一次支付发起的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: Uuid,
    pub phone: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub created_at: String,
}

/// 发起 STK 推送的请求
#[derive(Debug, Deserialize)]
pub struct StkPushRequest {
    pub phone: String,
    pub amount: f64,
}
