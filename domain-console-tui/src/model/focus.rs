//! 焦点状态

/// 当前接收按键的区域
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPanel {
    /// 域名表格
    #[default]
    Table,
    /// 搜索框
    Search,
}

impl FocusPanel {
    pub fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}
