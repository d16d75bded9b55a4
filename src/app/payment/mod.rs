//! 支付应用（移动支付发起边界）

pub mod handler;
pub mod model;
pub mod service;
