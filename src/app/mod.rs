//! 应用层模块

pub mod cart;
pub mod catalog;
pub mod payment;
