//! 商品目录应用（商品 + 特价商品）

pub mod handler;
pub mod model;
pub mod service;
