//! WiFi Admin Server - 宽带运营商后台管理服务
//!
//! # 架构概述
//!
//! 为后台控制台提供数据与 HTTP 接口：
//!
//! - **仓库** (`db`): 进程内存储，七张表 (用户、客户、工程师、套餐、投诉、通知、工单)
//! - **HTTP API** (`api`): RESTful CRUD 接口 + 投诉统计
//! - **资源版本** (`core::state`): 控制台轮询的变更计数
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── db/            # 内存仓库、按实体的 repository、示例数据
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由与中间件装配
//! └── utils/         # 错误、日志、参数校验、密码哈希
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

use anyhow::Context;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::Store;
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 `.env`、读取配置、初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();

    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {dir}"))?;
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    api::health::mark_start();

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
 _       ___ _______    ___       __          _
| |     / (_) ____(_)  /   | ____/ /___ ___  (_)___
| | /| / / / /_  / /  / /| |/ __  / __ `__ \/ / __ \
| |/ |/ / / __/ / /  / ___ / /_/ / / / / / / / / / /
|__/|__/_/_/   /_/  /_/  |_\__,_/_/ /_/ /_/_/_/ /_/
    "#
    );
}
