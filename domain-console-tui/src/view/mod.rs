//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!     layout.rs                   标题栏 + 内容区 + 状态栏
//!     pages/domains.rs            操作栏（排序、搜索）与域名表格
//!     components/modal.rs         表单、确认删除、帮助弹窗
//!     components/statusbar.rs     快捷键提示与通知
//!     theme.rs                    颜色与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
