use std::time::{Duration, Instant};

use crate::backend::AppConfig;

use super::{DomainsState, FocusPanel, ModalState, Notification, NotificationLevel};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusPanel,

    /// 域名页面状态
    pub domains: DomainsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前通知
    pub notification: Option<Notification>,

    /// 通知显示时长
    pub notification_ttl: Duration,

    /// 数据服务地址（标题栏显示）
    pub base_url: String,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Table,
            domains: DomainsState::new(config.default_sort),
            modal: ModalState::new(),
            notification: None,
            notification_ttl: Duration::from_secs(config.notification_secs),
            base_url: config.base_url.clone(),
        }
    }

    /// 显示成功通知
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    /// 显示错误通知
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message, self.notification_ttl));
    }

    /// 清除已过期的通知
    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
