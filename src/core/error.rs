//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::cart::service::CheckoutError;
use crate::app::payment::service::PaymentError;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    Unauthorized,
    NotFound(String),
    /// 结算失败（持久化错误或超时），购物车保持原样
    CheckoutFailed(CheckoutError),
    /// 支付发起失败
    PaymentFailed(PaymentError),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            CoreError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "认证失败，请提供有效的认证信息".to_string(),
            ),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            CoreError::CheckoutFailed(err) => (
                StatusCode::BAD_GATEWAY,
                "CHECKOUT_FAILED",
                format!("结算失败，购物车未变更，可重试: {}", err),
            ),
            CoreError::PaymentFailed(err) => (
                StatusCode::BAD_GATEWAY,
                "PAYMENT_FAILED",
                format!("支付发起失败: {}", err),
            ),
            CoreError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<CheckoutError> for CoreError {
    fn from(err: CheckoutError) -> Self {
        CoreError::CheckoutFailed(err)
    }
}

impl From<PaymentError> for CoreError {
    fn from(err: PaymentError) -> Self {
        CoreError::PaymentFailed(err)
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();

        CoreError::BadRequest(messages.join(", "))
    }
}
