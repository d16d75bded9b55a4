//! 商品目录处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;
use validator::Validate;

use super::model::{AttachImageRequest, CreateProductRequest, Product, ProductQuery};
use super::service::Collection;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;
use crate::AppState;

/// 获取商品列表
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let products = state.catalog.list(Collection::Products, &query);
    Json(ApiResponse::success(products))
}

/// 获取特定商品
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.catalog.get(Collection::Products, id)?;
    Ok(Json(ApiResponse::success(product)))
}

/// 创建新商品
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let product = state.catalog.create(Collection::Products, payload)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// 回填商品图片地址
pub async fn attach_product_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttachImageRequest>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    payload.validate()?;
    let product = state
        .catalog
        .attach_image(Collection::Products, id, payload.image_url)?;
    Ok(Json(ApiResponse::success(product)))
}

/// 获取特价商品列表
pub async fn list_offers(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let offers = state.catalog.list(Collection::SpecialOffers, &query);
    Json(ApiResponse::success(offers))
}

/// 创建特价商品
pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let offer = state.catalog.create(Collection::SpecialOffers, payload)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(offer))))
}

/// 回填特价商品图片地址
pub async fn attach_offer_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttachImageRequest>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    payload.validate()?;
    let product = state
        .catalog
        .attach_image(Collection::SpecialOffers, id, payload.image_url)?;
    Ok(Json(ApiResponse::success(product)))
}
