//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查接口
//! - [`tables`] - 桌台管理接口
//! - [`groups`] - 桌组管理接口
//! - [`orders`] - 订单管理接口
//! - [`customers`] - 顾客管理接口

pub mod customers;
pub mod groups;
pub mod health;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::AppResult;
