//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`AppResult`] - handler 使用的 Result 别名
//! - 日志等工具

pub mod logger;
pub mod result;

// Re-export error types from shared
pub use result::AppResult;
pub use shared::{ApiResponse, error::ApiError as AppError};
