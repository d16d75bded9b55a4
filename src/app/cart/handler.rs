//! 购物车处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{CartLineItem, CheckoutSummary};
use crate::app::catalog::service::Collection;
use crate::app::payment::model::PaymentIntent;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;
use crate::AppState;

/// 加入购物车请求（按商品标识引用目录里的快照）
#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
}

/// 加入购物车结果
#[derive(Debug, Serialize)]
pub struct CartItemAdded {
    pub line_id: Uuid,
    pub cart_len: usize,
}

/// 结算请求。提供手机号时先发起 STK 推送支付
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub phone: Option<String>,
}

/// 结算响应
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub summary: CheckoutSummary,
    pub payment: Option<PaymentIntent>,
}

/// 查看购物车
pub async fn get_cart(State(state): State<AppState>) -> Json<ApiResponse<Vec<CartLineItem>>> {
    Json(ApiResponse::success(state.cart.items()))
}

/// 加入购物车。商品快照从目录取出后复制进购物车
pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(payload): Json<AddCartItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CartItemAdded>>), CoreError> {
    // 普通商品优先，找不到再查特价商品
    let product = state
        .catalog
        .get(Collection::Products, payload.product_id)
        .or_else(|_| state.catalog.get(Collection::SpecialOffers, payload.product_id))?;

    let line_id = state.cart.add_item(product);
    let added = CartItemAdded {
        line_id,
        cart_len: state.cart.len(),
    };
    Ok((StatusCode::CREATED, Json(ApiResponse::success(added))))
}

/// 移除购物车行项。行项不存在时同样返回成功（无操作）
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path(line_id): Path<Uuid>,
) -> Json<ApiResponse<usize>> {
    state.cart.remove_item(line_id);
    Json(ApiResponse::success_with_message(
        state.cart.len(),
        "行项已移除",
    ))
}

/// 清空购物车
pub async fn clear_cart(State(state): State<AppState>) -> Json<ApiResponse<usize>> {
    state.cart.clear();
    Json(ApiResponse::success_with_message(0, "购物车已清空"))
}

/// 结算。多步流程按直线代码编排，唯一的错误出口是 `?`：
/// 发起支付（可选）→ 批量写订单 → 清空购物车（由服务内部完成）
pub async fn checkout(
    State(state): State<AppState>,
    payload: Option<Json<CheckoutRequest>>,
) -> Result<Json<ApiResponse<CheckoutResponse>>, CoreError> {
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let payment = match req.phone {
        Some(phone) => {
            let amount: f64 = state
                .cart
                .items()
                .iter()
                .map(|item| item.product.price)
                .sum();
            Some(state.payments.initiate_stk_push(&phone, amount).await?)
        }
        None => None,
    };

    let summary = state.cart.checkout().await?;

    Ok(Json(ApiResponse::success(CheckoutResponse {
        summary,
        payment,
    })))
}
