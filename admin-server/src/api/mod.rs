//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`users`] - 后台用户管理接口
//! - [`customers`] - 客户管理接口
//! - [`engineers`] - 工程师管理接口
//! - [`service_plans`] - 套餐管理接口
//! - [`complaints`] - 投诉管理与统计接口
//! - [`notifications`] - 通知管理接口
//! - [`support_tickets`] - 工单管理接口
//! - [`sync`] - 资源版本接口

pub mod health;
pub mod sync;

// Back-office resources
pub mod complaints;
pub mod customers;
pub mod engineers;
pub mod notifications;
pub mod service_plans;
pub mod support_tickets;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
