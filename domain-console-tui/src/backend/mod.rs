//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//!     config_service.rs   配置文件读写
//!     core_service.rs     组装 domain-console-core，在 tokio 运行时上执行 Command，
//!                         结果以 AppMessage 送回主循环
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, FileConfigService, APP_DIR};
pub use core_service::CoreService;
