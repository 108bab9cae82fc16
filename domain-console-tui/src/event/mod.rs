//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件翻译成 AppMessage：
//!     handler.rs      轮询事件，按弹窗 / 搜索框 / 列表分发按键
//!     keymap.rs       快捷键定义
//!
//! 按键优先级：弹窗 > 搜索框 > 全局快捷键 > 列表操作
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
