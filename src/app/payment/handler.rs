//! 支付处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::model::{PaymentIntent, StkPushRequest};
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;
use crate::AppState;

/// 发起 STK 推送支付
pub async fn initiate_stk_push(
    State(state): State<AppState>,
    Json(payload): Json<StkPushRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentIntent>>), CoreError> {
    let intent = state
        .payments
        .initiate_stk_push(&payload.phone, payload.amount)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(intent))))
}
