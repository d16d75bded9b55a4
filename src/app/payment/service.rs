//! 支付业务服务
//!
//! 真实网关的线上协议不在本仓库范围内，这里只定义发起支付的
//! 边界接口，并提供一个进程内的沙箱实现供开发和测试使用。

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::model::{PaymentIntent, PaymentStatus};

/// 支付错误类型
#[derive(Debug)]
pub enum PaymentError {
    /// 手机号格式不合法
    InvalidPhone(String),
    /// 金额不合法
    InvalidAmount(f64),
    /// 网关拒绝或不可达
    GatewayRejected(String),
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::InvalidPhone(phone) => write!(f, "无效的手机号: {}", phone),
            PaymentError::InvalidAmount(amount) => write!(f, "无效的金额: {}", amount),
            PaymentError::GatewayRejected(msg) => write!(f, "支付网关拒绝: {}", msg),
        }
    }
}

impl std::error::Error for PaymentError {}

/// 支付网关接口：手机号 + 金额 → 异步支付确认
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initiate_stk_push(
        &self,
        phone: &str,
        amount: f64,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// 沙箱网关：校验入参后直接返回已确认的支付
#[derive(Default)]
pub struct SandboxGateway;

impl SandboxGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn initiate_stk_push(
        &self,
        phone: &str,
        amount: f64,
    ) -> Result<PaymentIntent, PaymentError> {
        let digits = phone.strip_prefix('+').unwrap_or(phone);
        if digits.len() < 9 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaymentError::InvalidPhone(phone.to_string()));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let intent = PaymentIntent {
            id: Uuid::new_v4(),
            phone: phone.to_string(),
            amount,
            status: PaymentStatus::Confirmed,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        info!("沙箱支付已确认: {} -> {}", intent.phone, intent.amount);
        Ok(intent)
    }
}
