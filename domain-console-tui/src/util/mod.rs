//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的代码：
//!     terminal.rs     终端初始化和恢复（原始模式 + 备用屏幕）
//!     logging.rs      日志写入滚动文件（终端占用了 stdout）
//!     text.rs         按显示宽度截取文本
//!
//! 在 src/main.rs 中，终端初始化后进入主循环，
//! 主循环返回后（无论成功失败）立即恢复终端，再返回结果。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::fit_tail;
