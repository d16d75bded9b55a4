//! 商品目录业务服务
//!
//! 商品和特价商品是两个独立的集合，结构相同。
//! 创建商品分两步：先以空图片地址写入文档，图片上传（外部服务）
//! 完成后再通过 attach_image 回填地址。

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;
use validator::Validate;

use super::model::{CreateProductRequest, Product, ProductQuery};
use crate::core::error::CoreError;

/// 集合类型：商品或特价商品
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    SpecialOffers,
}

type ProductMap = Arc<Mutex<HashMap<Uuid, Product>>>;

#[derive(Clone, Default)]
pub struct CatalogService {
    products: ProductMap,
    special_offers: ProductMap,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, collection: Collection) -> &ProductMap {
        match collection {
            Collection::Products => &self.products,
            Collection::SpecialOffers => &self.special_offers,
        }
    }

    /// 创建商品文档，图片地址先留空
    pub fn create(
        &self,
        collection: Collection,
        req: CreateProductRequest,
    ) -> Result<Product, CoreError> {
        req.validate()?;

        let product = Product {
            id: Uuid::new_v4(),
            name: req.name.trim().to_string(),
            description: req.description.trim().to_string(),
            price: req.price,
            image_url: String::new(),
            user_id: req.user_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let mut map = self.collection(collection).lock().unwrap();
        map.insert(product.id, product.clone());
        Ok(product)
    }

    /// 图片上传完成后回填图片地址
    pub fn attach_image(
        &self,
        collection: Collection,
        id: Uuid,
        image_url: String,
    ) -> Result<Product, CoreError> {
        let mut map = self.collection(collection).lock().unwrap();
        match map.get_mut(&id) {
            Some(product) => {
                product.image_url = image_url;
                Ok(product.clone())
            }
            None => Err(CoreError::NotFound(format!("商品 {} 不存在", id))),
        }
    }

    pub fn get(&self, collection: Collection, id: Uuid) -> Result<Product, CoreError> {
        let map = self.collection(collection).lock().unwrap();
        map.get(&id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))
    }

    /// 获取商品列表（支持按用户、名称过滤）
    pub fn list(&self, collection: Collection, query: &ProductQuery) -> Vec<Product> {
        let map = self.collection(collection).lock().unwrap();
        let mut items: Vec<Product> = map.values().cloned().collect();

        if let Some(user_id) = &query.user_id {
            items.retain(|p| &p.user_id == user_id);
        }
        if let Some(name) = &query.name {
            items.retain(|p| p.name.contains(name.as_str()));
        }

        // 按创建时间排序
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        items
    }
}
