//! Floor Server - 餐厅楼面管理服务
//!
//! # 架构概述
//!
//! 本模块是楼面服务的主入口，提供以下核心功能：
//!
//! - **域存储** (`store`): 桌台/桌组/订单/顾客的单写者内存存储
//! - **金额计算** (`money`): 基于 rust_decimal 的订单金额引擎
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! floor-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 域存储 (桌台、桌组、订单、顾客)
//! ├── money/         # 金额计算
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod money;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, build_router};
pub use store::{FloorStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选，加载失败不致命
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/ /___  ____  _____
  / /_  / / __ \/ __ \/ ___/
 / __/ / / /_/ / /_/ / /
/_/   /_/\____/\____/_/
    "#
    );
}
