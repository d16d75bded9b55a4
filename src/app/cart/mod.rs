//! 购物车应用（本仓库的核心聚合）

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
