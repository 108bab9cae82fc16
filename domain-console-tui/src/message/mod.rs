//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//! 有模块结构：
//!     app.rs          主消息 AppMessage
//!     content.rs      域名列表（选择、搜索、排序、行操作）
//!     modal.rs        弹窗（表单、确认删除、帮助）
//!     backend.rs      后台任务回传的结果
//!     command.rs      Update 层交给 Backend 执行的指令
//!
//! 数据流：
//!     按键 ──▶ Event ──▶ AppMessage ──▶ Update ──▶ Option<Command> ──▶ Backend
//!                                         ▲                              │
//!                                         └──── BackendMessage ◀─────────┘
//!

mod app;
mod backend;
mod command;
mod content;
mod modal;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use modal::ModalMessage;
