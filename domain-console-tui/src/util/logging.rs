//! 日志初始化
//!
//! 终端占用 stdout，日志写入按天滚动的文件：
//! `<data_local_dir>/domain-console/logs/domain-console.log.YYYY-MM-DD`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::APP_DIR;

const LOG_FILE_PREFIX: &str = "domain-console.log";

/// 初始化日志
///
/// `RUST_LOG` takes precedence over `level`. Records emitted through the
/// `log` facade by the library crates end up in the same file. The returned
/// guard flushes the writer on drop and must live until exit.
pub fn init_logging(level: &str) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(guard)
}

fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine the data directory")?;
    Ok(base.join(APP_DIR).join("logs"))
}
