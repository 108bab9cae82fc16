//! Domain Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 启动顺序：
//!     读取配置 → 初始化日志 → 创建 tokio 运行时与 CoreService
//!     → 初始化终端 → 主循环 → 恢复终端（无论成功与否）

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::sync::mpsc;

use backend::{AppConfig, ConfigService, CoreService, FileConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config = load_config(&FileConfigService::new()?)?;

    // 2. 初始化日志（guard 存活到程序结束）
    let _log_guard = init_logging(&config.log_level)?;
    tracing::info!("Starting Domain Console v{}", env!("CARGO_PKG_VERSION"));

    // 3. 后台运行时与核心服务
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = CoreService::new(&config, runtime.handle().clone(), tx)?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(&config);
    backend.start();
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Domain Console exited with error: {e:#}");
    } else {
        tracing::info!("Domain Console exited");
    }
    result
}

/// 读取配置；首次运行时写入默认配置
fn load_config(service: &FileConfigService) -> Result<AppConfig> {
    let config = service.load()?;
    if !service.path().exists() {
        service.save(&config)?;
    }
    Ok(config)
}
