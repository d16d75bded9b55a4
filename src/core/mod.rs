//! 核心层模块

pub mod error;
pub mod middleware;
pub mod response;
