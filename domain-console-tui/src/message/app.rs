//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列表相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 强制重新获取列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 定时检查（通知过期）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
