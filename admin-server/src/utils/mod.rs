//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::error)
//! - [`validation`] - 请求参数校验
//! - [`password`] - 密码哈希 (argon2)
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod password;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, OrNotFound};
