//! 购物车数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::catalog::model::Product;

/// 购物车行项。每行包装一个商品快照，数量恒为 1：
/// 同一商品加入两次产生两个独立的行项，不做合并。
///
/// `line_id` 在加入购物车时生成。两个包装相同商品的行项
/// 无法靠商品内容区分，删除按 `line_id` 定位，保证确定性。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub line_id: Uuid,
    pub product: Product,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self {
            line_id: Uuid::new_v4(),
            product,
        }
    }
}

/// 购物车：按加入顺序保存的行项序列（旧的在前）。
/// 会话开始时为空，add/remove 修改，结算成功后清空。
#[derive(Debug, Default, Clone, Serialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定商品快照构造行项并追加到末尾，返回行项标识
    pub fn add_item(&mut self, product: Product) -> Uuid {
        let item = CartLineItem::new(product);
        let line_id = item.line_id;
        self.items.push(item);
        line_id
    }

    /// 移除首个匹配的行项；不存在时为无操作，不报错
    pub fn remove_item(&mut self, line_id: Uuid) {
        if let Some(pos) = self.items.iter().position(|item| item.line_id == line_id) {
            self.items.remove(pos);
        }
    }

    /// 无条件清空
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 订单记录：结算时每个行项持久化一条。
/// 写入成功后购物车与订单不再有任何关系。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub product_id: Uuid,
    pub product_name: String,
    /// 恒为 1
    pub quantity: u32,
    /// 毫秒时间戳
    pub timestamp: i64,
}

/// 结算结果
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSummary {
    /// 本次写入的订单数
    pub orders: usize,
    /// 结算时刻（毫秒时间戳）
    pub timestamp_millis: i64,
}
