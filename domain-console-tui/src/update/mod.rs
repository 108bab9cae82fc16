//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要后台执行的动作不在这里直接调用，而是返回一个 `Command`，
//! 由主循环交给 Backend 层。
//!
//! 有模块结构：
//!     content.rs      列表：选择、搜索、排序、行操作
//!     modal.rs        弹窗：表单输入与提交、确认删除、帮助
//!     backend.rs      后台结果：列表数据、会话变化、操作完成通知
//!
//! Update 完成后，控制权返回主循环（app.rs），
//! 下一轮循环时 View 层读取更新后的 Model 重新渲染。
//!

mod backend;
mod content;
mod modal;

use std::time::Instant;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Refresh => {
            app.notify_info("Refreshing...");
            Some(Command::Refresh)
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Tick => {
            app.expire_notification(Instant::now());
            None
        }

        AppMessage::Noop => None,
    }
}
