//! 商品目录数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 商品快照。购物车持有的是副本而非活引用，取回后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// 单价，非负
    pub price: f64,
    /// 图片地址，图片上传完成前为空字符串
    pub image_url: String,
    /// 所属用户标识（认证由外部服务提供）
    pub user_id: String,
    pub created_at: String,
}

/// 创建商品请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "商品名称长度必须在 1 到 100 之间"))]
    pub name: String,

    #[validate(length(max = 2000, message = "商品描述不能超过 2000 字符"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "价格不能为负数"))]
    pub price: f64,

    #[validate(length(min = 1, message = "用户标识不能为空"))]
    pub user_id: String,
}

/// 图片上传完成后回填图片地址的请求
#[derive(Debug, Deserialize, Validate)]
pub struct AttachImageRequest {
    #[validate(url(message = "无效的图片地址"))]
    pub image_url: String,
}

/// 商品列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
