//! 域名列表消息

/// 域名列表相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 选择第一项
    SelectFirst,
    /// 选择最后一项
    SelectLast,

    /// 打开新增表单
    Add,
    /// 编辑选中项
    Edit,
    /// 删除选中项（先确认）
    Delete,
    /// 验证选中项
    Verify,

    /// 聚焦搜索框
    FocusSearch,
    /// 离开搜索框
    LeaveSearch,
    /// 搜索框输入字符
    SearchInput(char),
    /// 搜索框删除字符
    SearchBackspace,
    /// 清空搜索
    SearchClear,

    /// 下一种排序
    NextSort,
    /// 上一种排序
    PrevSort,
}
