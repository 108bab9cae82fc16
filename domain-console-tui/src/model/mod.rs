//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 纯数据，不做 IO。只有 Update 层可以修改它，View 层只读取它。
//!
//! 有模块结构：
//!     app.rs              App 主状态
//!     focus.rs            焦点（列表 / 搜索框）
//!     notification.rs     带过期时间的通知
//!     state/domains.rs    域名列表、搜索、排序、选中项
//!     state/modal.rs      弹窗（表单、确认删除、帮助）
//!

mod app;
mod focus;
mod notification;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use notification::{Notification, NotificationLevel};
pub use state::{DomainsState, FormField, Modal, ModalState};
