//! 基础设施层模块

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
